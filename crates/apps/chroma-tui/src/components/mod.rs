pub mod dialog;
pub mod header;
pub mod home;
pub mod shared;
pub mod sidebar;
pub mod status_bar;
pub mod theme_card;
pub mod themes;
