//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and policies, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Orientation, Vector3};

/// World placement of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector3,
    pub orientation: Orientation,
}

/// One-way disposal flag. Once set, the entity is skipped by every system
/// and removed at the next compaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub disposed: bool,
}

/// Marks the player ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a formation alien.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Alien {
    pub subtype: AlienSubtype,
}

/// Marks the wave boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mothership;

/// Remaining damage capacity of an alien or mothership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: u32,
}

/// Side-to-side patrol state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Patrol {
    /// +1.0 moving right, -1.0 moving left.
    pub direction: f32,
}

/// Fire gating timer (seconds). Ready when <= 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FireCooldown {
    pub remaining_secs: f32,
}

/// Projectile motion state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub side: Side,
    /// Unit travel axis, fixed at spawn.
    pub axis: Vector3,
    /// Speed in units per normalized frame.
    pub speed: f32,
}

/// Visual effect with a limited lifetime. No gameplay effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub magnitude: f32,
    pub duration_secs: f32,
    pub elapsed_secs: f32,
}

/// Load state of an entity's renderable representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelState {
    /// Requested, not yet delivered. The entity is inert.
    Pending,
    /// Delivered; the collision surface uses these half-extents.
    Loaded { half_extents: Vector3 },
    /// Load failed. The entity stays inert for good.
    Failed,
}

/// Asset-backed representation of an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Model {
    pub id: ModelId,
    pub state: ModelState,
}
