use crate::theme::StyleSheet;
use chroma_core::ShellController;

/// Columns in the theme card grid on the Themes page.
pub const GRID_COLUMNS: usize = 3;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ViewState {
    Home,
    Themes,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Sidebar,
    Content,
}

/// Outcome of loading the theme store, as observed by the shell.
#[derive(PartialEq, Clone, Debug)]
pub enum ThemeLoad {
    Loading,
    Ready,
    Error(String),
}

pub struct AppState {
    pub view: ViewState,
    pub focus: Focus,

    // Theme store; `None` until loading settles, and only while
    // `theme_load` is `Ready` afterwards.
    pub controller: Option<ShellController>,
    pub theme_load: ThemeLoad,

    // Ambient stylesheet derived from the active theme.
    pub styles: StyleSheet,

    // Selection cursors
    pub nav_index: usize,
    pub card_index: usize,

    // Feedback
    pub notification: Option<(String, std::time::Instant)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewState::Home,
            focus: Focus::Sidebar,
            controller: None,
            theme_load: ThemeLoad::Loading,
            styles: StyleSheet::default(),
            nav_index: 0,
            card_index: 0,
            notification: None,
        }
    }
}

impl AppState {
    pub fn set_notification(&mut self, msg: String) {
        self.notification = Some((msg, std::time::Instant::now()));
    }

    pub fn clear_expired_notifications(&mut self) {
        if let Some((_, time)) = &self.notification {
            if time.elapsed() > std::time::Duration::from_secs(3) {
                self.notification = None;
            }
        }
    }

    /// Re-derives the ambient stylesheet from the active theme.
    pub fn refresh_styles(&mut self) {
        if let Some(ctl) = &self.controller {
            self.styles = StyleSheet::from_theme(ctl.active_theme());
        }
    }

    pub fn theme_count(&self) -> usize {
        self.controller
            .as_ref()
            .map(|c| c.registry().len())
            .unwrap_or(0)
    }

    /// Name of the theme under the card cursor, if any.
    pub fn selected_theme_name(&self) -> Option<String> {
        let ctl = self.controller.as_ref()?;
        ctl.registry()
            .themes()
            .nth(self.card_index)
            .map(|t| t.name.clone())
    }

    /// Moves the card cursor by one step in the grid, clamped to the
    /// registry bounds.
    pub fn move_card(&mut self, dx: isize, dy: isize) {
        let len = self.theme_count();
        if len == 0 {
            return;
        }
        let delta = dx + dy * GRID_COLUMNS as isize;
        let next = self.card_index as isize + delta;
        self.card_index = next.clamp(0, len as isize - 1) as usize;
    }

    /// Keeps the card cursor in bounds after a deletion shrank the registry.
    pub fn clamp_card_index(&mut self) {
        let len = self.theme_count();
        if len > 0 && self.card_index >= len {
            self.card_index = len - 1;
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.controller
            .as_ref()
            .map(|c| c.sidebar_collapsed())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::ShellController;
    use tempfile::TempDir;

    fn ready_state(dir: &TempDir) -> AppState {
        let mut state = AppState::default();
        state.controller = Some(ShellController::new(dir.path()).unwrap());
        state.theme_load = ThemeLoad::Ready;
        state.refresh_styles();
        state
    }

    #[test]
    fn card_cursor_stays_in_bounds() {
        let dir = TempDir::new().unwrap();
        let mut state = ready_state(&dir);
        let len = state.theme_count();
        assert!(len >= 3);

        state.move_card(-1, 0);
        assert_eq!(state.card_index, 0);
        state.move_card(0, 10);
        assert_eq!(state.card_index, len - 1);
    }

    #[test]
    fn cursor_clamped_after_registry_shrinks() {
        let dir = TempDir::new().unwrap();
        let mut state = ready_state(&dir);
        state.card_index = state.theme_count();
        state.clamp_card_index();
        assert_eq!(state.card_index, state.theme_count() - 1);
    }

    #[test]
    fn selected_theme_name_follows_cursor() {
        let dir = TempDir::new().unwrap();
        let state = ready_state(&dir);
        assert_eq!(
            state.selected_theme_name().as_deref(),
            Some(chroma_core::DEFAULT_THEME_NAME)
        );
    }
}
