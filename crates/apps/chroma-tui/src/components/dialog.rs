use crate::app::AppState;
use crate::components::shared;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Delete-confirmation popup, shown while the controller holds a pending
/// deletion. Pure rendering: the state machine lives in the controller.
pub fn render(f: &mut Frame, state: &AppState) {
    let ctl = match &state.controller {
        Some(ctl) => ctl,
        None => return,
    };
    let name = match ctl.pending_delete() {
        Some(name) => name,
        None => return,
    };
    let display_name = ctl
        .registry()
        .get(name)
        .map(|t| t.display_name.clone())
        .unwrap_or_else(|| name.to_string());

    let styles = &state.styles;
    let area = centered_rect(50, 25, f.size());
    f.render_widget(Clear, area);

    let block = shared::panel(styles, " DELETE THEME ", true);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Are you sure you want to delete \"{}\"?", display_name),
            Style::default().fg(styles.text_main),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [Enter] Confirm ",
                Style::default().bg(styles.destructive).fg(styles.bg).bold(),
            ),
            Span::styled("   ", Style::default()),
            Span::styled(" [Esc] Cancel ", Style::default().fg(styles.text_dim)),
        ])
        .alignment(Alignment::Center),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
