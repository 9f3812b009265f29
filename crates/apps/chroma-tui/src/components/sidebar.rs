use crate::app::{AppState, Focus, ViewState};
use crate::components::shared;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub const NAV_ITEMS: &[(ViewState, &str, &str)] = &[
    (ViewState::Home, "󱂵", "Home"),
    (ViewState::Themes, "󰏘", "Themes"),
];

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let styles = &state.styles;
    let is_focused = state.focus == Focus::Sidebar;
    let collapsed = state.sidebar_collapsed();

    let title = if collapsed {
        format!(" {} ", styles.flavor_glyph())
    } else {
        format!(" {} CHROMA ", styles.flavor_glyph())
    };
    let block = shared::panel(styles, title, is_focused);

    let mut items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, (view, glyph, label))| {
            let style = shared::row_style(
                styles,
                idx == state.nav_index,
                state.view == *view,
                is_focused,
            );
            let text = if collapsed {
                format!(" {} ", glyph)
            } else {
                format!(" {} {} ", glyph, label)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    items.push(ListItem::new(Line::from("")));
    let toggle_hint = if collapsed { " [b] »" } else { " [b] « collapse" };
    items.push(ListItem::new(Line::from(Span::styled(
        toggle_hint,
        Style::default().fg(styles.text_dim),
    ))));

    let list = List::new(items).block(block).highlight_symbol("");
    f.render_widget(list, area);
}
