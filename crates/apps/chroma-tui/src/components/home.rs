use crate::app::{AppState, Focus};
use crate::components::shared;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let styles = &state.styles;
    let is_focused = state.focus == Focus::Content;

    let block = shared::panel(styles, " HOME ", is_focused);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Welcome to Chroma",
            Style::default()
                .fg(styles.text_main)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " A themeable terminal shell. Press 2 to browse themes.",
            Style::default().fg(styles.text_dim),
        )),
        Line::from(""),
    ];

    if let Some(ctl) = &state.controller {
        let theme = ctl.active_theme();
        lines.push(Line::from(vec![
            Span::styled(" Active theme: ", Style::default().fg(styles.text_dim)),
            Span::styled(
                theme.display_name.clone(),
                Style::default()
                    .fg(styles.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} available)", ctl.registry().len()),
                Style::default().fg(styles.text_dim),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
