//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Vector3;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left a firer.
    ProjectileFired { side: Side, position: Vector3 },
    /// A projectile struck a target that survived.
    TargetHit {
        tag: CollisionTag,
        hit_points_left: u32,
        position: Vector3,
    },
    /// A formation alien ran out of hit points.
    AlienDestroyed { position: Vector3 },
    /// The wave boss entered.
    MothershipSpawned { position: Vector3 },
    /// The wave boss ran out of hit points.
    MothershipDestroyed { position: Vector3 },
    /// A fresh roster was deployed.
    WaveStarted { wave: u32 },
    /// A barrier surface was struck. The owning collaborator removes it.
    BarrierDestroyed { surface: Option<u64> },
    /// The player ship was hit. The session is over.
    PlayerDestroyed { position: Vector3 },
    /// A model could not be loaded; the entity stays inert.
    AssetLoadFailed { model: ModelId },
}
