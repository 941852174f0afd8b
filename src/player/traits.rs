use anyhow::Result;

/// Web address the external player streams a catalog item from.
pub fn watch_url(item_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", item_id)
}

/// The playback collaborator 🔊
///
/// Takes an item id and a play/pause flag. The "ended" signal travels back
/// as `AppEvent::PlaybackEnded` on the channel the player was built with.
pub trait PlaybackTrait: Send {
    /// Replace whatever is playing with `item_id`.
    fn load(&mut self, item_id: &str, playing: bool) -> Result<()>;
    fn set_playing(&mut self, playing: bool) -> Result<()>;
    fn stop(&mut self) -> Result<()>;

    /// Tag of the item currently loaded; ended events for older tags are stale.
    fn generation(&self) -> u64;
}
