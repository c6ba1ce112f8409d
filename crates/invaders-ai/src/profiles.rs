//! Per-kind behavioral profiles.
//!
//! Consolidates the tuning parameters the movement and fire policies read.

use invaders_core::types::Vector3;

/// The two enemy actor kinds that patrol and fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gunship {
    Alien,
    Mothership,
}

/// How a gunship re-arms its fire cooldown after shooting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CooldownRule {
    /// Uniform random duration in [min, max).
    Uniform { min: f32, max: f32 },
    /// Always the same duration.
    Fixed(f32),
}

/// Behavioral profile for a gunship kind.
#[derive(Debug, Clone, Copy)]
pub struct GunshipProfile {
    /// Hit points at spawn.
    pub hit_points: u32,
    /// Horizontal speed (units per normalized frame).
    pub speed: f32,
    /// Vertical drop on each direction reversal.
    pub step_down: f32,
    /// Per-tick probability of firing once the cooldown has elapsed.
    pub fire_probability: f32,
    pub cooldown: CooldownRule,
    /// Axis of the cosmetic wobble applied when a hit is survived.
    pub wobble_axis: Vector3,
    /// Half-range of that wobble (radians).
    pub wobble_half_range: f32,
}

/// Get the behavioral profile for a given gunship kind.
pub fn get_profile(kind: Gunship) -> GunshipProfile {
    use invaders_core::constants::*;

    match kind {
        Gunship::Alien => GunshipProfile {
            hit_points: ALIEN_HIT_POINTS,
            speed: ALIEN_SPEED,
            step_down: ALIEN_STEP_DOWN,
            fire_probability: ALIEN_FIRE_PROBABILITY,
            cooldown: CooldownRule::Uniform {
                min: ALIEN_FIRE_COOLDOWN_MIN,
                max: ALIEN_FIRE_COOLDOWN_MAX,
            },
            wobble_axis: Vector3::X,
            wobble_half_range: ALIEN_HIT_TILT,
        },
        Gunship::Mothership => GunshipProfile {
            hit_points: MOTHERSHIP_HIT_POINTS,
            speed: MOTHERSHIP_SPEED,
            step_down: 0.0,
            fire_probability: MOTHERSHIP_FIRE_PROBABILITY,
            cooldown: CooldownRule::Fixed(MOTHERSHIP_FIRE_COOLDOWN),
            wobble_axis: Vector3::Z,
            wobble_half_range: MOTHERSHIP_HIT_ROLL,
        },
    }
}
