//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Capability discriminator carried by every simulated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Alien,
    Mothership,
    PlayerProjectile,
    AlienProjectile,
    Explosion,
}

/// Type tag attached to a collision surface so a struck surface maps back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionTag {
    Player,
    Alien,
    Mothership,
    Barrier,
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Alien,
}

/// Visual alien variant. Assigned at random per formation cell; gameplay is identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlienSubtype {
    #[default]
    Scout,
    Raider,
    Stinger,
}

impl AlienSubtype {
    pub const ALL: [AlienSubtype; 3] = [
        AlienSubtype::Scout,
        AlienSubtype::Raider,
        AlienSubtype::Stinger,
    ];

    pub fn model(self) -> ModelId {
        match self {
            AlienSubtype::Scout => ModelId::Alien1,
            AlienSubtype::Raider => ModelId::Alien2,
            AlienSubtype::Stinger => ModelId::Alien3,
        }
    }
}

/// Identifier of a loadable model asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    Player1,
    Alien1,
    Alien2,
    Alien3,
    Mothership,
}

impl ModelId {
    /// Asset name as published by the asset pipeline.
    pub fn asset_name(self) -> &'static str {
        match self {
            ModelId::Player1 => "Player_1",
            ModelId::Alien1 => "Alien_1",
            ModelId::Alien2 => "Alien_2",
            ModelId::Alien3 => "Alien_3",
            ModelId::Mothership => "Mothership",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first StartGame command.
    #[default]
    Title,
    /// Gameplay is running.
    Active,
    /// The player was destroyed. Terminal until Restart.
    GameOver,
}

/// Wave progression state derived from the roster and the mothership slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Alien roster non-empty.
    #[default]
    WaveInProgress,
    /// Roster empty, mothership not yet spawned.
    BossPending,
    /// Mothership present.
    BossActive,
}

/// Result of applying a hit to a destructible actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// Hit points reached zero on this hit.
    Destroyed,
    /// Hit points decremented but remain above zero.
    Survived,
    /// The target was already disposed or not hittable. Nothing changed.
    Ignored,
}
