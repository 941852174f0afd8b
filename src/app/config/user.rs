use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Title of the root menu and the status bar
    pub device_name: String,
    pub api_base: String,
    pub playlist_limit: u32,
    pub item_limit: u32,
    /// OAuth bearer token; `--token` and the environment take precedence
    pub access_token: Option<String>,
    /// Shown as "Signed in as ..." when the account lookup has no name
    pub user_name: Option<String>,
    /// External player; empty disables audio
    pub player_command: String,
    pub player_args: Vec<String>,
    /// Height / width of a terminal cell
    pub cell_aspect: f64,
    pub keys: crate::app::keys::KeyConfig,
    pub theme: crate::ui::theme::Theme,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            device_name: "iPod".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            playlist_limit: 20,
            item_limit: 50,
            access_token: None,
            user_name: None,
            player_command: "mpv".to_string(),
            player_args: vec!["--no-video".to_string(), "--really-quiet".to_string()],
            cell_aspect: 2.0,
            keys: crate::app::keys::KeyConfig::default(),
            theme: crate::ui::theme::Theme::default(),
        }
    }
}
