use crate::error::{AppError, AppResult};
use crate::theme::DEFAULT_THEME_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_active_theme")]
    pub active_theme: String,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

fn default_active_theme() -> String {
    DEFAULT_THEME_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_theme: default_active_theme(),
            sidebar_collapsed: false,
        }
    }
}

/// Loads and persists `<base_dir>/config.toml`.
pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new(base_dir: &std::path::Path) -> AppResult<Self> {
        let config_path = base_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(AppError::IoGeneric)?;
            toml::from_str(&content).unwrap_or_default()
        } else {
            Config::default()
        };

        // Auto-save default if missing
        if !config_path.exists() {
            if let Err(e) = Self::save_to_path(&config, &config_path) {
                log::warn!("Failed to save default config: {}", e);
            }
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.config, &self.config_path)
    }

    fn save_to_path(config: &Config, path: &PathBuf) -> AppResult<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;

        // Atomic write: write to tempfile then rename to prevent corruption on crash
        let parent = path.parent().unwrap_or(std::path::Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path)
            .map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn set_active_theme(&mut self, name: &str) -> AppResult<()> {
        self.config.active_theme = name.to_string();
        self.save()
    }

    /// Flips and persists the sidebar collapse flag, returning the new value.
    pub fn toggle_sidebar_collapsed(&mut self) -> AppResult<bool> {
        self.config.sidebar_collapsed = !self.config.sidebar_collapsed;
        self.save()?;
        Ok(self.config.sidebar_collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_created_when_missing() {
        let dir = TempDir::new().unwrap();
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.active_theme, DEFAULT_THEME_NAME);
        assert!(!config_manager.config.sidebar_collapsed);
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn active_theme_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut config_manager = ConfigManager::new(dir.path()).unwrap();
            config_manager.set_active_theme("paper").unwrap();
        }
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.active_theme, "paper");
    }

    #[test]
    fn sidebar_collapse_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut config_manager = ConfigManager::new(dir.path()).unwrap();
            let collapsed = config_manager.toggle_sidebar_collapsed().unwrap();
            assert!(collapsed);
        }
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert!(config_manager.config.sidebar_collapsed);
    }
}
