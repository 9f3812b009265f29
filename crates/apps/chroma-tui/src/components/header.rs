use crate::app::{AppState, ViewState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let styles = &state.styles;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(0),     // Tabs
            Constraint::Length(30), // Active theme
        ])
        .split(area);

    let logo = Paragraph::new(Span::styled(
        " CHROMA ",
        Style::default()
            .fg(styles.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .bg(styles.bg);
    f.render_widget(logo, chunks[0]);

    let tabs = vec![
        (ViewState::Home, " 󱂵 HOME (1) "),
        (ViewState::Themes, " 󰏘 THEMES (2) "),
    ];

    let mut header_items = vec![];
    for (view, label) in tabs {
        let is_active = state.view == view;
        let style = if is_active {
            Style::default().fg(styles.bg).bg(styles.accent).bold()
        } else {
            Style::default().fg(styles.text_dim)
        };
        header_items.push(Span::styled(label, style));
        header_items.push(Span::styled(" ", Style::default()));
    }

    let tabs_para = Paragraph::new(Line::from(header_items)).bg(styles.bg);
    f.render_widget(tabs_para, chunks[1]);

    if let Some(ctl) = &state.controller {
        let theme = ctl.active_theme();
        let theme_info = Paragraph::new(Line::from(vec![
            Span::styled(" theme ", Style::default().fg(styles.text_dim)),
            Span::styled(
                format!("{} ", styles.flavor_glyph()),
                Style::default().fg(styles.accent),
            ),
            Span::styled(
                theme.display_name.clone(),
                Style::default()
                    .fg(styles.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]))
        .alignment(ratatui::layout::Alignment::Right)
        .bg(styles.bg);
        f.render_widget(theme_info, chunks[2]);
    }
}
