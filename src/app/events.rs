use crossterm::event::Event;
use image::DynamicImage;

use crate::auth::Session;
use crate::catalog::{FetchTicket, PlaylistsPayload};
use crate::app::menu::MenuNode;

pub enum AppEvent {
    Input(Event),
    SessionUpdate(Session),
    PlaylistsLoaded(PlaylistsPayload),
    SongsLoaded(FetchTicket, Vec<MenuNode>),
    /// (what, error)
    CatalogFailed(String, String),
    ArtworkUpdate(String, Option<DynamicImage>),
    /// Player generation that reached the end of its item
    PlaybackEnded(u64),
    Tick,
}
