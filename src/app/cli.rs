use clap::Parser;
use std::path::PathBuf;

/// clickwheel - your playlists behind a click wheel 🎵
#[derive(Parser, Debug)]
#[command(name = "clickwheel", version, about)]
pub struct Args {
    /// OAuth bearer token for the catalog API (overrides env and config)
    #[arg(long)]
    pub token: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Browse only, never start the external player
    #[arg(long)]
    pub no_audio: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
