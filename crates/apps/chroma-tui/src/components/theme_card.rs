use crate::theme::StyleSheet;
use chroma_core::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders one theme preview card.
///
/// The card body uses a stylesheet derived from the theme it shows, not the
/// ambient one, so every card previews itself faithfully. Only the selection
/// cues (cursor border, active check) come from the ambient theme.
pub fn render(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    is_active: bool,
    is_cursor: bool,
    ambient: &StyleSheet,
) {
    let card = StyleSheet::from_theme(theme);

    let border_color = if is_cursor {
        ambient.primary
    } else {
        card.border
    };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", theme.display_name),
        Style::default()
            .fg(card.text_main)
            .add_modifier(Modifier::BOLD),
    )];
    if is_active {
        title_spans.push(Span::styled(
            "✓ ",
            Style::default()
                .fg(ambient.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::PLAIN)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(title_spans))
        .bg(card.bg);

    let swatches = Line::from(vec![
        Span::styled("██ ", Style::default().fg(card.primary)),
        Span::styled("██ ", Style::default().fg(card.secondary)),
        Span::styled("██ ", Style::default().fg(card.accent)),
        Span::styled("██ ", Style::default().fg(card.destructive)),
    ]);

    let mut footer = vec![Span::styled(
        theme.heading_font().to_string(),
        Style::default().fg(card.text_dim),
    )];
    if theme.is_user_theme {
        footer.push(Span::styled(
            "  [d] delete",
            Style::default().fg(card.destructive),
        ));
    }

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            " Aa ",
            Style::default().fg(card.bg).bg(card.primary).bold(),
        )),
        swatches,
        Line::from(footer),
    ])
    .block(block);

    f.render_widget(body, area);
}
