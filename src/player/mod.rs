pub mod dummy;
pub mod process;
pub mod traits;

pub use dummy::DummyPlayer;
pub use process::ProcessPlayer;
pub use traits::{watch_url, PlaybackTrait};

use crate::app::config::UserConfig;
use crate::app::events::AppEvent;
use tokio::sync::mpsc;

/// Factory to get the configured player
pub fn get_player(
    config: &UserConfig,
    no_audio: bool,
    events: mpsc::Sender<AppEvent>,
) -> Box<dyn PlaybackTrait> {
    if no_audio || config.player_command.trim().is_empty() {
        Box::new(DummyPlayer::default())
    } else {
        Box::new(ProcessPlayer::new(
            &config.player_command,
            &config.player_args,
            events,
        ))
    }
}
