use crate::app::{AppState, Focus, ThemeLoad, GRID_COLUMNS};
use crate::components::{shared, theme_card};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CARD_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let styles = &state.styles;
    let is_focused = state.focus == Focus::Content;

    let block = shared::panel(styles, " THEMES ", is_focused);
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);

    match &state.theme_load {
        ThemeLoad::Loading => {
            let msg = Paragraph::new(Line::from(Span::styled(
                "Loading themes...",
                Style::default().fg(styles.text_dim),
            )))
            .alignment(Alignment::Center);
            f.render_widget(msg, inner);
        }
        ThemeLoad::Error(error) => {
            let msg = Paragraph::new(Line::from(vec![
                Span::styled(
                    " ERROR ",
                    Style::default()
                        .fg(styles.bg)
                        .bg(styles.destructive)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" Error loading themes: {}", error),
                    Style::default().fg(styles.destructive),
                ),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(msg, inner);
        }
        ThemeLoad::Ready => render_ready(f, inner, state),
    }
}

fn render_ready(f: &mut Frame, area: Rect, state: &AppState) {
    let ctl = match &state.controller {
        Some(ctl) => ctl,
        None => return,
    };
    let styles = &state.styles;

    let themes: Vec<_> = ctl.registry().themes().collect();
    let rows = themes.len().div_ceil(GRID_COLUMNS);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(CARD_HEIGHT); rows];
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Min(6)); // current theme detail

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let active_name = ctl.active_theme_name().to_string();
    for (row, row_themes) in themes.chunks(GRID_COLUMNS).enumerate() {
        if row >= rows || chunks[row].height == 0 {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(chunks[row]);

        for (col, theme) in row_themes.iter().enumerate() {
            let idx = row * GRID_COLUMNS + col;
            let is_cursor = state.focus == Focus::Content && idx == state.card_index;
            theme_card::render(
                f,
                cols[col],
                theme,
                theme.name == active_name,
                is_cursor,
                styles,
            );
        }
    }

    render_detail(f, chunks[rows + 1], state);
}

/// Detail panel for the active theme: palette, corner tokens, fonts.
fn render_detail(f: &mut Frame, area: Rect, state: &AppState) {
    let ctl = match &state.controller {
        Some(ctl) => ctl,
        None => return,
    };
    let styles = &state.styles;
    let theme = ctl.active_theme();

    let block = shared::panel(styles, format!(" CURRENT: {} ", theme.display_name), false);

    let mut lines = Vec::new();

    if let Some(palette) = &theme.colors {
        let swatch = |label: &str, color: chroma_core::Color| {
            vec![
                Span::styled(
                    format!(" {:<12}", label),
                    Style::default().fg(styles.text_main),
                ),
                Span::styled(
                    "██ ",
                    Style::default().fg(ratatui::style::Color::Rgb(color.r, color.g, color.b)),
                ),
                Span::styled(color.to_hex(), Style::default().fg(styles.text_dim)),
            ]
        };
        lines.push(Line::from(swatch("Primary", palette.primary)));
        lines.push(Line::from(swatch("Secondary", palette.secondary)));
        lines.push(Line::from(swatch("Accent", palette.accent)));
        lines.push(Line::from(swatch("Destructive", palette.destructive)));
    } else {
        lines.push(Line::from(Span::styled(
            " No palette: scaffold colors in use",
            Style::default().fg(styles.text_dim),
        )));
    }

    let corners = theme
        .corners
        .as_ref()
        .map(|c| format!("sm {} · md {} · lg {}", c.sm, c.md, c.lg))
        .unwrap_or_else(|| "Default".to_string());
    lines.push(Line::from(vec![
        Span::styled(" Corners     ", Style::default().fg(styles.text_main)),
        Span::styled(corners, Style::default().fg(styles.text_dim)),
    ]));

    let fonts = theme
        .fonts
        .as_ref()
        .map(|fs| format!("{} / {}", fs.heading, fs.body))
        .unwrap_or_else(|| "Default".to_string());
    lines.push(Line::from(vec![
        Span::styled(" Fonts       ", Style::default().fg(styles.text_main)),
        Span::styled(fonts, Style::default().fg(styles.text_dim)),
    ]));

    let detail = Paragraph::new(lines).block(block);
    f.render_widget(detail, area);
}
