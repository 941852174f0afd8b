use crate::app::events::AppEvent;
use crate::player::traits::{watch_url, PlaybackTrait};
use anyhow::{Context, Result};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct Running {
    pid: Pid,
    paused: bool,
}

/// Streams through an external command (mpv by default).
///
/// Pause and resume are SIGSTOP / SIGCONT on the child; a clean exit is the
/// end of the item.
pub struct ProcessPlayer {
    command: String,
    args: Vec<String>,
    events: mpsc::Sender<AppEvent>,
    current: Option<Running>,
    generation: u64,
}

impl ProcessPlayer {
    pub fn new(command: &str, args: &[String], events: mpsc::Sender<AppEvent>) -> Self {
        Self {
            command: command.to_string(),
            args: args.to_vec(),
            events,
            current: None,
            generation: 0,
        }
    }

    fn signal(&self, sig: Signal) -> Result<()> {
        if let Some(running) = &self.current {
            kill(running.pid, sig).with_context(|| format!("failed to send {:?} to player", sig))?;
        }
        Ok(())
    }
}

impl PlaybackTrait for ProcessPlayer {
    fn load(&mut self, item_id: &str, playing: bool) -> Result<()> {
        self.stop()?;
        self.generation += 1;
        let generation = self.generation;

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(watch_url(item_id))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start player `{}`", self.command))?;

        let pid = child
            .id()
            .map(|id| Pid::from_raw(id as i32))
            .context("player exited before it could be tracked")?;
        info!(item_id, generation, pid = pid.as_raw(), "player started");

        let tx = self.events.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    let _ = tx.send(AppEvent::PlaybackEnded(generation)).await;
                }
                Ok(status) => debug!(generation, %status, "player stopped"),
                Err(e) => warn!(generation, error = %e, "lost track of player"),
            }
        });

        self.current = Some(Running { pid, paused: false });
        if !playing {
            self.set_playing(false)?;
        }
        Ok(())
    }

    fn set_playing(&mut self, playing: bool) -> Result<()> {
        let Some(paused) = self.current.as_ref().map(|r| r.paused) else {
            return Ok(());
        };
        if paused == !playing {
            return Ok(());
        }
        self.signal(if playing { Signal::SIGCONT } else { Signal::SIGSTOP })?;
        if let Some(running) = self.current.as_mut() {
            running.paused = !playing;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        // a stopped process only acts on SIGTERM once continued
        let result = self
            .signal(Signal::SIGTERM)
            .and_then(|_| self.signal(Signal::SIGCONT));
        self.current = None;
        if let Err(e) = result {
            // already gone
            debug!(error = %e, "player was not running");
        }
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
