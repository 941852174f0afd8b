pub mod config;
pub mod menu;
pub mod navigation;
pub mod queue;
pub mod state;
pub mod wheel;

pub mod cli;
pub mod events;
pub mod keys;
pub mod input_handler;
pub use menu::{MenuKind, MenuNode};
pub use state::*;
