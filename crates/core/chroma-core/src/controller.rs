use crate::config::ConfigManager;
use crate::error::{AppError, AppResult};
use crate::registry::ThemeRegistry;
use crate::theme::{Theme, DEFAULT_THEME_NAME};
use std::path::Path;

/// Deletion confirmation gate.
///
/// A delete request parks the target name here until the user confirms or
/// cancels; nothing is removed while pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    PendingConfirmation(String),
}

/// Maps user intent (select, delete, collapse) onto the theme registry and
/// persisted settings.
///
/// Owns both collaborators so the active-theme reference can never dangle:
/// a persisted name that no longer resolves is reset to the built-in default
/// during construction, and deleting the active theme reassigns it in the
/// same operation.
pub struct ShellController {
    registry: ThemeRegistry,
    config: ConfigManager,
    delete_state: DeleteState,
}

impl ShellController {
    pub fn new(base_dir: &Path) -> AppResult<Self> {
        std::fs::create_dir_all(base_dir).map_err(AppError::IoGeneric)?;
        let registry = ThemeRegistry::new(base_dir)?;
        let mut config = ConfigManager::new(base_dir)?;

        if registry.get(&config.config.active_theme).is_none() {
            log::warn!(
                "Active theme {:?} is not in the registry, falling back to {:?}",
                config.config.active_theme,
                DEFAULT_THEME_NAME
            );
            config.set_active_theme(DEFAULT_THEME_NAME)?;
        }

        Ok(Self {
            registry,
            config,
            delete_state: DeleteState::Idle,
        })
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn active_theme(&self) -> &Theme {
        self.registry
            .get(&self.config.config.active_theme)
            .unwrap_or_else(|| self.registry.default_theme())
    }

    pub fn active_theme_name(&self) -> &str {
        &self.config.config.active_theme
    }

    /// Sets the named theme as active and persists the choice.
    pub fn select_theme(&mut self, name: &str) -> AppResult<()> {
        if self.registry.get(name).is_none() {
            return Err(AppError::NotFound(format!(
                "Theme {:?} is not in the registry",
                name
            )));
        }
        self.config.set_active_theme(name)
    }

    pub fn add_user_theme(&mut self, theme: Theme) -> AppResult<()> {
        self.registry.add_user_theme(theme)
    }

    /// First step of the two-step delete: validates the target and parks it
    /// for confirmation. Never removes anything.
    pub fn request_delete(&mut self, name: &str) -> AppResult<()> {
        match self.registry.get(name) {
            None => Err(AppError::NotFound(format!(
                "Theme {:?} is not in the registry",
                name
            ))),
            Some(theme) if !theme.is_user_theme => Err(AppError::InvalidOperation(format!(
                "Theme {:?} is built-in and cannot be deleted",
                name
            ))),
            Some(_) => {
                self.delete_state = DeleteState::PendingConfirmation(name.to_string());
                Ok(())
            }
        }
    }

    /// Completes a pending delete. Returns the removed theme, or `None` when
    /// nothing was pending.
    ///
    /// When the target is the active theme, the active reference moves to the
    /// built-in default in the same operation. Removal goes first: if it
    /// fails the registry is unchanged and the active name still resolves, so
    /// the reference never dangles on either branch.
    pub fn confirm_delete(&mut self) -> AppResult<Option<Theme>> {
        let name = match std::mem::take(&mut self.delete_state) {
            DeleteState::Idle => return Ok(None),
            DeleteState::PendingConfirmation(name) => name,
        };

        let was_active = self.config.config.active_theme == name;
        let removed = self.registry.remove(&name)?;
        if was_active {
            self.config.set_active_theme(DEFAULT_THEME_NAME)?;
        }
        Ok(Some(removed))
    }

    pub fn cancel_delete(&mut self) {
        self.delete_state = DeleteState::Idle;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        match &self.delete_state {
            DeleteState::Idle => None,
            DeleteState::PendingConfirmation(name) => Some(name),
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.config.config.sidebar_collapsed
    }

    /// Flips and persists the sidebar collapse flag.
    pub fn toggle_sidebar(&mut self) -> AppResult<bool> {
        self.config.toggle_sidebar_collapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MostLike;
    use tempfile::TempDir;

    fn user_theme(name: &str) -> Theme {
        Theme {
            name: name.to_string(),
            display_name: name.to_string(),
            colors: None,
            fonts: None,
            corners: None,
            most_like: MostLike::Dark,
            is_user_theme: true,
        }
    }

    fn controller_with(dir: &TempDir, user: &[&str]) -> ShellController {
        let mut ctl = ShellController::new(dir.path()).unwrap();
        for name in user {
            ctl.add_user_theme(user_theme(name)).unwrap();
        }
        ctl
    }

    #[test]
    fn select_present_theme_activates_it() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &["ocean"]);
        ctl.select_theme("ocean").unwrap();
        assert_eq!(ctl.active_theme().name, "ocean");
    }

    #[test]
    fn select_absent_theme_fails_and_leaves_active_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &[]);
        let err = ctl.select_theme("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(ctl.active_theme().name, DEFAULT_THEME_NAME);
    }

    #[test]
    fn delete_built_in_fails_with_invalid_operation() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &[]);
        let count = ctl.registry().len();
        let err = ctl.request_delete(DEFAULT_THEME_NAME).unwrap_err();
        assert!(matches!(err, AppError::InvalidOperation(_)));
        assert_eq!(ctl.pending_delete(), None);
        assert_eq!(ctl.registry().len(), count);
    }

    #[test]
    fn delete_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &["ocean"]);

        ctl.request_delete("ocean").unwrap();
        assert_eq!(ctl.pending_delete(), Some("ocean"));
        // Still present until confirmed.
        assert!(ctl.registry().get("ocean").is_some());

        ctl.cancel_delete();
        assert_eq!(ctl.pending_delete(), None);
        assert!(ctl.registry().get("ocean").is_some());
    }

    #[test]
    fn confirm_with_no_pending_target_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &["ocean"]);
        let count = ctl.registry().len();
        assert!(ctl.confirm_delete().unwrap().is_none());
        assert_eq!(ctl.registry().len(), count);
    }

    #[test]
    fn deleting_active_theme_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &["ocean", "forest"]);
        ctl.select_theme("ocean").unwrap();

        ctl.request_delete("ocean").unwrap();
        let removed = ctl.confirm_delete().unwrap().unwrap();

        assert_eq!(removed.name, "ocean");
        assert!(ctl.registry().get("ocean").is_none());
        assert!(ctl.registry().get("forest").is_some());
        assert_eq!(ctl.active_theme().name, DEFAULT_THEME_NAME);
    }

    #[test]
    fn deleting_inactive_theme_keeps_active_untouched() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller_with(&dir, &["ocean", "forest"]);
        ctl.select_theme("forest").unwrap();

        ctl.request_delete("ocean").unwrap();
        ctl.confirm_delete().unwrap();
        assert_eq!(ctl.active_theme().name, "forest");
    }

    #[test]
    fn failed_removal_keeps_selection_consistent() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("store");
        let mut ctl = ShellController::new(&base).unwrap();
        ctl.add_user_theme(user_theme("ocean")).unwrap();
        ctl.select_theme("ocean").unwrap();
        ctl.request_delete("ocean").unwrap();

        // Pull the store out from under the controller so the removal
        // cannot persist.
        std::fs::remove_dir_all(&base).unwrap();

        assert!(ctl.confirm_delete().is_err());
        // The failed operation changed nothing: the theme is still in the
        // registry and still active, and no deletion is pending.
        assert!(ctl.registry().get("ocean").is_some());
        assert_eq!(ctl.active_theme().name, "ocean");
        assert_eq!(ctl.pending_delete(), None);
    }

    #[test]
    fn dangling_persisted_active_theme_resets_to_default() {
        let dir = TempDir::new().unwrap();
        {
            let mut ctl = controller_with(&dir, &["ocean"]);
            ctl.select_theme("ocean").unwrap();
        }
        // Wipe the user theme behind the controller's back.
        std::fs::write(dir.path().join("themes.json"), "[]").unwrap();

        let ctl = ShellController::new(dir.path()).unwrap();
        assert_eq!(ctl.active_theme().name, DEFAULT_THEME_NAME);
    }

    #[test]
    fn toggle_sidebar_flips_and_persists() {
        let dir = TempDir::new().unwrap();
        {
            let mut ctl = controller_with(&dir, &[]);
            assert!(!ctl.sidebar_collapsed());
            assert!(ctl.toggle_sidebar().unwrap());
        }
        let ctl = ShellController::new(dir.path()).unwrap();
        assert!(ctl.sidebar_collapsed());
    }
}
