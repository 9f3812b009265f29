pub mod app;
pub mod components;
pub mod events;
pub mod theme;
pub mod view;

pub use app::{AppState, Focus, ThemeLoad, ViewState};
pub use events::{AppEvent, EventHandler};
