use crate::theme::StyleSheet;
use ratatui::{
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

/// Bordered panel that picks up the accent while its pane has focus.
pub fn panel<'a, T>(styles: &StyleSheet, title: T, focused: bool) -> Block<'a>
where
    T: Into<Line<'a>>,
{
    let (border_color, title_style) = if focused {
        (
            styles.accent,
            Style::default()
                .fg(styles.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (styles.border, Style::default().fg(styles.text_dim))
    };

    Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::PLAIN)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(title_style)
        .bg(styles.bg)
}

/// Full-frame background fill behind all panes.
pub fn backdrop(styles: &StyleSheet) -> Block<'static> {
    Block::default()
        .bg(styles.bg)
        .padding(Padding::horizontal(1))
}

/// Style for one row of a navigable list: the cursor inverts onto the
/// accent, the current entry keeps the accent even when the pane is
/// unfocused, everything else dims with the pane.
pub fn row_style(styles: &StyleSheet, is_cursor: bool, is_current: bool, focused: bool) -> Style {
    if is_cursor && focused {
        Style::default()
            .fg(styles.bg)
            .bg(styles.accent)
            .add_modifier(Modifier::BOLD)
    } else if is_current {
        Style::default()
            .fg(styles.accent)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(styles.text_main)
    } else {
        Style::default().fg(styles.text_dim)
    }
}

/// Inverted accent chip, used for the status mode segment and toast tags.
pub fn badge<'a>(styles: &StyleSheet, text: &'a str) -> Span<'a> {
    Span::styled(
        text,
        Style::default().bg(styles.accent).fg(styles.bg).bold(),
    )
}
