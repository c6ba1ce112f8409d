//! Session state: everything one game owns, passed explicitly to every system.
//!
//! A restart builds a fresh `Session`; nothing survives from the previous one
//! except the list of entities the renderer still has to drop.

use hecs::{Entity, World};

use invaders_core::components::Lifecycle;
use invaders_core::enums::{GamePhase, Side};
use invaders_core::events::GameEvent;
use invaders_core::types::{Orientation, SimTime, Vector3};

use crate::director::WaveDirector;
use crate::interfaces::AssetRequest;

/// Deferred entity creation, flushed at fixed points of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    Projectile {
        side: Side,
        origin: Vector3,
        orientation: Orientation,
    },
    Explosion {
        position: Vector3,
        magnitude: f32,
        duration_secs: f32,
    },
}

impl SpawnRequest {
    /// Explosion request from a `(magnitude, duration)` preset.
    pub fn explosion(position: Vector3, preset: (f32, f32)) -> Self {
        SpawnRequest::Explosion {
            position,
            magnitude: preset.0,
            duration_secs: preset.1,
        }
    }
}

/// Notification to the wave director raised while hits are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectorSignal {
    AlienDestroyed { entity: Entity, position: Vector3 },
    MothershipDestroyed { entity: Entity, position: Vector3 },
    PlayerDestroyed { entity: Entity, position: Vector3 },
}

/// One game session.
pub struct Session {
    pub world: World,
    pub director: WaveDirector,
    pub player: Option<Entity>,
    pub time: SimTime,
    pub phase: GamePhase,
    /// Events collected since the last snapshot.
    pub events: Vec<GameEvent>,
    pub signals: Vec<DirectorSignal>,
    pub spawns: Vec<SpawnRequest>,
    /// Model requests not yet handed to the loader.
    pub asset_requests: Vec<AssetRequest>,
    /// Entities disposed or despawned since the last render sync.
    pub removed: Vec<Entity>,
    pub despawn_buffer: Vec<Entity>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            director: WaveDirector::default(),
            player: None,
            time: SimTime::default(),
            phase: GamePhase::Title,
            events: Vec::new(),
            signals: Vec::new(),
            spawns: Vec::new(),
            asset_requests: Vec::new(),
            removed: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whether `entity` is gone or disposed.
    pub fn is_disposed(&self, entity: Entity) -> bool {
        self.world
            .get::<&Lifecycle>(entity)
            .map(|life| life.disposed)
            .unwrap_or(true)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the one-way disposal flag. Returns false if it was already set.
pub fn mark_disposed(life: &mut Lifecycle, entity: Entity, removed: &mut Vec<Entity>) -> bool {
    if life.disposed {
        return false;
    }
    life.disposed = true;
    removed.push(entity);
    true
}
