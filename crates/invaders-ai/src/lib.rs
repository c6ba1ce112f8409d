//! Actor behavior for invaders.
//!
//! Implements the movement and fire policies of the player, formation
//! aliens, the mothership and projectiles, plus per-kind tuning profiles.

pub mod policy;
pub mod profiles;

pub use invaders_core as core;

#[cfg(test)]
mod tests;
