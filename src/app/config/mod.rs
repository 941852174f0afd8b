use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

pub mod user;

pub use user::UserConfig;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        let dir = base.join("clickwheel");

        // Ensure it exists
        if !dir.exists() {
            let _ = fs::create_dir_all(&dir);
        }

        dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clickwheel")
            .join("logs")
    }

    /// Load `config.toml`, writing the defaults out on first run.
    pub fn load(path: Option<&Path>) -> UserConfig {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                    warn!(path = %config_path.display(), error = %e, "invalid config, using defaults");
                    UserConfig::default()
                }),
                Err(e) => {
                    warn!(path = %config_path.display(), error = %e, "unreadable config, using defaults");
                    UserConfig::default()
                }
            }
        } else {
            let c = UserConfig::default();
            if let Ok(content) = Self::generate_default() {
                let _ = fs::write(&config_path, content);
            }
            c
        }
    }

    pub fn parse(content: &str) -> Result<UserConfig, toml::de::Error> {
        toml::from_str(content)
    }

    /// Default config as TOML, for `--generate-config`.
    pub fn generate_default() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&UserConfig::default())
    }
}
