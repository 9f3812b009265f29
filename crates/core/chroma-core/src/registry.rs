use crate::error::{AppError, AppResult};
use crate::theme::{builtin_themes, Theme, DEFAULT_THEME_NAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Manages the set of available themes in `<base_dir>/themes.json`.
///
/// Built-in themes come first, in shipping order, and are immutable; user
/// themes follow, sorted by name, and are the only entries that may be
/// removed. Names are unique across both groups.
pub struct ThemeRegistry {
    registry_path: PathBuf,
    builtins: Vec<Theme>,
    user_themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub fn new(base_dir: &Path) -> AppResult<Self> {
        let builtins = builtin_themes()?;
        if builtins.first().map(|t| t.name.as_str()) != Some(DEFAULT_THEME_NAME) {
            return Err(AppError::Config(format!(
                "Built-in theme set must lead with {:?}",
                DEFAULT_THEME_NAME
            )));
        }

        let registry_path = base_dir.join("themes.json");
        let mut user_themes: Vec<Theme> = if registry_path.exists() {
            let content = fs::read_to_string(&registry_path).map_err(AppError::IoGeneric)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            Vec::new()
        };

        // Purge entries that shadow a built-in or duplicate another user theme.
        let mut seen: Vec<String> = builtins.iter().map(|t| t.name.clone()).collect();
        user_themes.retain(|t| {
            if t.name.is_empty() || seen.contains(&t.name) {
                log::warn!("Dropping invalid user theme entry {:?}", t.name);
                false
            } else {
                seen.push(t.name.clone());
                true
            }
        });
        for theme in &mut user_themes {
            theme.is_user_theme = true;
        }
        user_themes.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            registry_path,
            builtins,
            user_themes,
        })
    }

    /// All themes in display order: built-ins, then user themes.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.builtins.iter().chain(self.user_themes.iter())
    }

    pub fn len(&self) -> usize {
        self.builtins.len() + self.user_themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes().find(|t| t.name == name)
    }

    /// The built-in fallback every dangling reference resolves to.
    pub fn default_theme(&self) -> &Theme {
        &self.builtins[0]
    }

    pub fn add_user_theme(&mut self, mut theme: Theme) -> AppResult<()> {
        if theme.name.is_empty() {
            return Err(AppError::InvalidOperation(
                "Theme name must not be empty".to_string(),
            ));
        }
        if self.get(&theme.name).is_some() {
            return Err(AppError::InvalidOperation(format!(
                "A theme named {:?} already exists",
                theme.name
            )));
        }
        theme.is_user_theme = true;
        let name = theme.name.clone();
        self.user_themes.push(theme);
        self.user_themes.sort_by(|a, b| a.name.cmp(&b.name));
        if let Err(e) = self.save() {
            self.user_themes.retain(|t| t.name != name);
            return Err(e);
        }
        Ok(())
    }

    /// Removes a user theme and returns it. Built-ins are never removable.
    pub fn remove(&mut self, name: &str) -> AppResult<Theme> {
        match self.get(name) {
            None => Err(AppError::NotFound(format!(
                "Theme {:?} is not in the registry",
                name
            ))),
            Some(theme) if !theme.is_user_theme => Err(AppError::InvalidOperation(format!(
                "Theme {:?} is built-in and cannot be deleted",
                name
            ))),
            Some(_) => {
                let idx = self
                    .user_themes
                    .iter()
                    .position(|t| t.name == name)
                    .ok_or_else(|| {
                        AppError::Internal(format!("User theme {:?} vanished mid-removal", name))
                    })?;
                let removed = self.user_themes.remove(idx);
                // Keep memory and disk in step: a failed save undoes the removal.
                if let Err(e) = self.save() {
                    self.user_themes.insert(idx, removed);
                    return Err(e);
                }
                Ok(removed)
            }
        }
    }

    fn save(&self) -> AppResult<()> {
        let content = serde_json::to_string_pretty(&self.user_themes)?;

        // Atomic write: write to tempfile then rename to prevent corruption on crash
        let parent = self.registry_path.parent().unwrap_or(Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(&self.registry_path)
            .map_err(|e| AppError::IoGeneric(e.error))?;

        Ok(())
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

    #[test]
    fn builtins_present_on_fresh_registry() {
        let dir = TempDir::new().unwrap();
        let registry = ThemeRegistry::new(dir.path()).unwrap();
        assert!(registry.get(DEFAULT_THEME_NAME).is_some());
        assert_eq!(registry.default_theme().name, DEFAULT_THEME_NAME);
        assert!(registry.themes().all(|t| !t.is_user_theme));
    }

    #[test]
    fn user_themes_persist_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut registry = ThemeRegistry::new(dir.path()).unwrap();
            registry.add_user_theme(user_theme("ocean")).unwrap();
        }
        let registry = ThemeRegistry::new(dir.path()).unwrap();
        let ocean = registry.get("ocean").unwrap();
        assert!(ocean.is_user_theme);
    }

    #[test]
    fn duplicate_names_rejected() {
        let dir = TempDir::new().unwrap();
        let mut registry = ThemeRegistry::new(dir.path()).unwrap();
        registry.add_user_theme(user_theme("ocean")).unwrap();
        assert!(matches!(
            registry.add_user_theme(user_theme("ocean")),
            Err(AppError::InvalidOperation(_))
        ));
        assert!(matches!(
            registry.add_user_theme(user_theme(DEFAULT_THEME_NAME)),
            Err(AppError::InvalidOperation(_))
        ));
    }

    #[test]
    fn builtins_not_removable() {
        let dir = TempDir::new().unwrap();
        let mut registry = ThemeRegistry::new(dir.path()).unwrap();
        let before = registry.len();
        assert!(matches!(
            registry.remove(DEFAULT_THEME_NAME),
            Err(AppError::InvalidOperation(_))
        ));
        assert!(matches!(
            registry.remove("no-such-theme"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn failed_save_rolls_back_removal() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("store");
        fs::create_dir_all(&base).unwrap();
        let mut registry = ThemeRegistry::new(&base).unwrap();
        registry.add_user_theme(user_theme("ocean")).unwrap();

        // Pull the store out from under the registry so the save must fail.
        fs::remove_dir_all(&base).unwrap();

        assert!(registry.remove("ocean").is_err());
        assert!(registry.get("ocean").is_some());
    }

    #[test]
    fn remove_returns_the_theme() {
        let dir = TempDir::new().unwrap();
        let mut registry = ThemeRegistry::new(dir.path()).unwrap();
        registry.add_user_theme(user_theme("forest")).unwrap();
        let removed = registry.remove("forest").unwrap();
        assert_eq!(removed.name, "forest");
        assert!(registry.get("forest").is_none());
    }
}
