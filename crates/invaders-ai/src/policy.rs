//! Movement and fire policies.
//!
//! Pure functions that compute one tick of motion and the fire decision for
//! each actor kind from elapsed time, current bounds and an injected random
//! source. No ECS dependency; operates on plain data.

use rand::Rng;

use invaders_core::constants::*;
use invaders_core::types::{InputState, Orientation, Vector3};

use crate::profiles::{CooldownRule, GunshipProfile};

/// Result of one patrol step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    pub position: Vector3,
    pub direction: f32,
    /// True when the step crossed the boundary and the direction flipped.
    pub reversed: bool,
}

/// Result of one fire-gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireDecision {
    pub cooldown_secs: f32,
    pub fire: bool,
}

/// Advance a gunship horizontally; flip and step down once past the boundary.
///
/// Only a step that ends outside the boundary while still heading outward
/// reverses, so each crossing flips the direction exactly once.
pub fn patrol(profile: &GunshipProfile, position: Vector3, direction: f32, dt: f32) -> PatrolStep {
    let mut position = position;
    let mut direction = direction;

    position.x += profile.speed * direction * dt * FRAME_RATE_NORMALIZER;

    let reversed = position.x.abs() > HORIZONTAL_BOUND && position.x * direction > 0.0;
    if reversed {
        direction = -direction;
        position.y -= profile.step_down;
    }

    PatrolStep {
        position,
        direction,
        reversed,
    }
}

/// Tick a gunship's cooldown and roll for a shot once it has elapsed.
///
/// The random draw only happens when the cooldown is ready.
pub fn gunship_fire<R: Rng + ?Sized>(
    profile: &GunshipProfile,
    cooldown_secs: f32,
    dt: f32,
    rng: &mut R,
) -> FireDecision {
    let cooldown_secs = cooldown_secs - dt;

    if cooldown_secs <= 0.0 && rng.gen::<f32>() < profile.fire_probability {
        let rearmed = match profile.cooldown {
            CooldownRule::Uniform { min, max } => rng.gen_range(min..max),
            CooldownRule::Fixed(secs) => secs,
        };
        return FireDecision {
            cooldown_secs: rearmed,
            fire: true,
        };
    }

    FireDecision {
        cooldown_secs,
        fire: false,
    }
}

/// Cosmetic rotation applied to a gunship that survives a hit.
pub fn hit_wobble<R: Rng + ?Sized>(profile: &GunshipProfile, rng: &mut R) -> Orientation {
    let half = profile.wobble_half_range;
    let angle = (rng.gen::<f32>() - 0.5) * 2.0 * half;
    Orientation::from_axis_angle(profile.wobble_axis, angle)
}

/// Move the player, gating each direction on the boundary before applying the delta.
pub fn player_step(position: Vector3, input: &InputState, dt: f32) -> Vector3 {
    let mut position = position;
    if input.left && position.x > -HORIZONTAL_BOUND {
        position.x -= PLAYER_SPEED * dt;
    }
    if input.right && position.x < HORIZONTAL_BOUND {
        position.x += PLAYER_SPEED * dt;
    }
    position
}

/// Tick the player's cooldown; fire while the trigger is held and the cooldown has elapsed.
pub fn player_fire(cooldown_secs: f32, input: &InputState, dt: f32) -> FireDecision {
    let cooldown_secs = cooldown_secs - dt;
    if input.fire && cooldown_secs <= 0.0 {
        FireDecision {
            cooldown_secs: PLAYER_FIRE_COOLDOWN,
            fire: true,
        }
    } else {
        FireDecision {
            cooldown_secs,
            fire: false,
        }
    }
}

/// Advance a projectile along its travel axis.
pub fn projectile_step(position: Vector3, axis: Vector3, speed: f32, dt: f32) -> Vector3 {
    position + axis * (speed * dt * FRAME_RATE_NORMALIZER)
}

/// Whether a projectile has passed the travel bound along its axis.
pub fn beyond_travel_bound(position: Vector3, axis: Vector3) -> bool {
    position.dot(axis) > PROJECTILE_TRAVEL_BOUND
}

/// Travel axis of an alien projectile: the firer's local "down" in world space.
pub fn alien_projectile_axis(firer: Orientation) -> Vector3 {
    (firer * Vector3::NEG_Y).normalize()
}

/// Entry point and initial direction of a new mothership.
///
/// The mothership starts at the edge on the side of its random direction.
pub fn mothership_entry<R: Rng + ?Sized>(rng: &mut R) -> (Vector3, f32) {
    let direction = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
    let position = Vector3::new(direction * HORIZONTAL_BOUND, MOTHERSHIP_SPAWN_Y, 0.0);
    (position, direction)
}

/// Position of a formation cell. Columns are centred on x = 0.
pub fn formation_cell(row: usize, column: usize) -> Vector3 {
    let center = (FORMATION_COLUMNS as f32 - 1.0) / 2.0;
    Vector3::new(
        (column as f32 - center) * FORMATION_COLUMN_SPACING,
        FORMATION_BASE_Y + row as f32 * FORMATION_ROW_SPACING,
        0.0,
    )
}
