use crate::app::{AppState, Focus, ViewState};
use crate::components::shared;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let styles = &state.styles;

    let has_dialog = state
        .controller
        .as_ref()
        .is_some_and(|c| c.pending_delete().is_some());

    let help_text = if has_dialog {
        " [Enter] Confirm Delete  [Esc] Cancel ".to_string()
    } else {
        match (state.view, state.focus) {
            (_, Focus::Sidebar) => {
                " [↑↓] Navigate  [Enter] Open  [B] Collapse  [Q] Quit ".to_string()
            }
            (ViewState::Themes, Focus::Content) => {
                " [←↑↓→] Browse  [Enter] Apply  [D] Delete  [Esc] Back  [Q] Quit ".to_string()
            }
            (ViewState::Home, Focus::Content) => " [2] Themes  [Esc] Back  [Q] Quit ".to_string(),
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let shortcuts = Paragraph::new(Line::from(vec![Span::styled(
        help_text,
        Style::default().fg(styles.text_dim),
    )]))
    .bg(styles.surface);
    f.render_widget(shortcuts, chunks[0]);

    let mode = Paragraph::new(Line::from(vec![shared::badge(styles, " SHELL ")]))
        .alignment(Alignment::Right)
        .bg(styles.surface);
    f.render_widget(mode, chunks[1]);
}
