use serde::Deserialize;

use crate::app::menu::MenuNode;

/// Titles the API uses for entries that can no longer be played.
pub const UNAVAILABLE_TITLES: [&str; 2] = ["Private video", "Deleted video"];

#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub snippet: ItemSnippet,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub snippet: PlaylistSnippet,
}

/// Every playlist becomes a remote-backed menu.
pub fn playlists_to_menu(playlists: Vec<Playlist>) -> Vec<MenuNode> {
    playlists
        .into_iter()
        .map(|p| MenuNode::remote_menu(&p.snippet.title, &p.id))
        .collect()
}

/// Playable entries become songs; unavailable or id-less ones are dropped.
pub fn items_to_songs(items: Vec<PlaylistItem>) -> Vec<MenuNode> {
    items
        .into_iter()
        .filter(|item| !UNAVAILABLE_TITLES.contains(&item.snippet.title.as_str()))
        .filter_map(|item| {
            let snippet = item.snippet;
            let video_id = snippet.resource_id.and_then(|r| r.video_id)?;
            let image_url = snippet.thumbnails.and_then(|t| t.high).map(|t| t.url);
            Some(MenuNode::song(&snippet.title, &video_id, image_url))
        })
        .collect()
}
