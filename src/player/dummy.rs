use crate::player::traits::PlaybackTrait;
use anyhow::Result;
use tracing::debug;

/// Silent player for `--no-audio` or an empty `player_command`.
#[derive(Debug, Default)]
pub struct DummyPlayer {
    generation: u64,
}

impl PlaybackTrait for DummyPlayer {
    fn load(&mut self, item_id: &str, playing: bool) -> Result<()> {
        self.generation += 1;
        debug!(item_id, playing, "audio disabled, not loading");
        Ok(())
    }

    fn set_playing(&mut self, _playing: bool) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
