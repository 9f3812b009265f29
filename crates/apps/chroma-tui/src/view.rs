use crate::app::{AppState, ViewState};
use crate::components::{dialog, header, home, shared, sidebar, status_bar, themes};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    widgets::Clear,
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    state.clear_expired_notifications();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header (logo + tabs)
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(f.size());

    f.render_widget(shared::backdrop(&state.styles), f.size());

    header::render(f, chunks[0], state);

    let sidebar_width = if state.sidebar_collapsed() { 6 } else { 22 };
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(chunks[1]);

    sidebar::render(f, body_chunks[0], state);

    match state.view {
        ViewState::Home => home::render(f, body_chunks[1], state),
        ViewState::Themes => themes::render(f, body_chunks[1], state),
    }

    status_bar::render(f, chunks[2], state);

    dialog::render(f, state);

    if let Some((msg, _)) = &state.notification {
        render_toast(f, msg, state);
    }
}

fn render_toast(f: &mut Frame, message: &str, state: &AppState) {
    use ratatui::{
        layout::Alignment,
        style::Style,
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph},
    };

    let frame = f.size();
    if frame.width < 4 || frame.height < 4 {
        return;
    }

    let styles = &state.styles;
    let width = (frame.width / 2).max(20).min(frame.width);
    let toast_area = ratatui::layout::Rect::new(
        (frame.width - width) / 2,
        frame.height.saturating_sub(4),
        width,
        3,
    );
    let text = Paragraph::new(Line::from(vec![
        shared::badge(styles, " INFO "),
        Span::styled(
            format!(" {} ", message),
            Style::default().fg(styles.text_main),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.accent))
            .bg(styles.surface),
    )
    .alignment(Alignment::Center);
    f.render_widget(Clear, toast_area);
    f.render_widget(text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn toast_renders_on_a_narrow_terminal() {
        // Narrower than the minimum toast width.
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        let mut state = AppState::default();
        state.set_notification("saved".to_string());
        terminal.draw(|f| render(f, &mut state)).unwrap();
    }

    #[test]
    fn tiny_terminal_skips_the_toast() {
        let mut terminal = Terminal::new(TestBackend::new(3, 3)).unwrap();
        let mut state = AppState::default();
        state.set_notification("saved".to_string());
        terminal.draw(|f| render(f, &mut state)).unwrap();
    }
}
