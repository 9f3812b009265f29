pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod registry;
pub mod theme;

pub use config::{Config, ConfigManager};
pub use controller::{DeleteState, ShellController};
pub use error::{AppError, AppResult};
pub use registry::ThemeRegistry;
pub use theme::{builtin_themes, Color, Corners, FontSet, MostLike, Palette, Theme, DEFAULT_THEME_NAME};
