pub mod app;
pub mod artwork;
pub mod auth;
pub mod catalog;
pub mod player;
pub mod ui;
