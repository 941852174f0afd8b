pub mod cover_flow;
pub mod menu;
pub mod player;
pub mod status_bar;
pub mod toast;
pub mod wheel;
