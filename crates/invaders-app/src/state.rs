//! State shared between the host and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use invaders_core::commands::SessionCommand;
use invaders_core::state::GameStateSnapshot;

/// Commands sent from the host to the frame loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A session command to forward to the simulation engine.
    Session(SessionCommand),
    /// Shut down the frame loop gracefully.
    Shutdown,
}

/// Handles the host keeps while the frame loop runs.
///
/// - `command_tx` is `None` until the loop has been spawned.
/// - `latest_snapshot` is shared with the loop thread and replaced every frame.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Clone of the most recent snapshot, if one has been published.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
