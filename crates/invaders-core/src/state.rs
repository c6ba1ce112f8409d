//! Game state snapshot: the complete visible state handed to collaborators after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, Vector3};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub wave_phase: WavePhase,
    pub game_over: bool,
    pub player: Option<PlayerView>,
    pub aliens: Vec<AlienView>,
    pub mothership: Option<MothershipView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub events: Vec<GameEvent>,
}

/// Player ship state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vector3,
    pub fire_cooldown_secs: f32,
    /// False until the player model has loaded.
    pub live: bool,
}

/// A formation alien.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienView {
    /// Owner id of the alien, stable for its lifetime.
    pub id: u64,
    pub subtype: AlienSubtype,
    pub position: Vector3,
    pub hit_points: u32,
    pub direction: f32,
    pub live: bool,
}

/// The wave boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MothershipView {
    pub id: u64,
    pub position: Vector3,
    pub hit_points: u32,
    pub direction: f32,
    pub live: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub side: Side,
    pub position: Vector3,
}

/// A running visual effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Vector3,
    pub magnitude: f32,
    /// 0.0 at spawn, 1.0 at expiry.
    pub progress: f32,
}
