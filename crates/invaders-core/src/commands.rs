//! Session commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Host-level session control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Leave the title screen and deploy the first wave.
    StartGame,
    /// Tear down the current session and start a fresh one.
    Restart,
}
