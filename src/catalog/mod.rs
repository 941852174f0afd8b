use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::app::config::UserConfig;
use crate::app::menu::MenuNode;

pub mod types;

use types::{items_to_songs, playlists_to_menu, Channel, ListResponse, Playlist, PlaylistItem};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Identifies what a playlist-items request was issued for, so the answer
/// can be dropped if the session changed in the meantime 🎫
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    /// Stack path of the listing that holds the playlist entry.
    pub parent_path: Vec<usize>,
    pub index: usize,
    pub playlist_id: String,
    pub label: String,
}

/// Playlists of the signed-in account plus its display name.
#[derive(Debug, Clone)]
pub struct PlaylistsPayload {
    pub generation: u64,
    pub playlists: Vec<MenuNode>,
    pub owner: Option<String>,
}

/// Thin typed client over the playlist endpoints 📡
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    api_base: String,
    playlist_limit: u32,
    item_limit: u32,
}

impl CatalogClient {
    pub fn new(client: Client, config: &UserConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            playlist_limit: config.playlist_limit,
            item_limit: config.item_limit,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.api_base, endpoint);
        debug!(%url, "catalog request");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(token)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn fetch_playlists(&self, token: &str) -> Result<Vec<MenuNode>, CatalogError> {
        let params = [
            ("part", "snippet".to_string()),
            ("mine", "true".to_string()),
            ("maxResults", self.playlist_limit.to_string()),
        ];
        let resp: ListResponse<Playlist> = self.get("playlists", token, &params).await?;
        Ok(playlists_to_menu(resp.items))
    }

    pub async fn fetch_songs(
        &self,
        token: &str,
        playlist_id: &str,
    ) -> Result<Vec<MenuNode>, CatalogError> {
        let params = [
            ("part", "snippet".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", self.item_limit.to_string()),
        ];
        let resp: ListResponse<PlaylistItem> = self.get("playlistItems", token, &params).await?;
        Ok(items_to_songs(resp.items))
    }

    /// Display name of the account's own channel, if it has one.
    pub async fn fetch_channel_title(&self, token: &str) -> Result<Option<String>, CatalogError> {
        let params = [
            ("part", "snippet".to_string()),
            ("mine", "true".to_string()),
        ];
        let resp: ListResponse<Channel> = self.get("channels", token, &params).await?;
        Ok(resp
            .items
            .into_iter()
            .map(|c| c.snippet.title)
            .find(|t| !t.is_empty()))
    }
}
