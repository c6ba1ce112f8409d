//! Simulation engine for the invaders arcade core.
//!
//! Owns the hecs ECS world, runs systems once per frame, resolves projectile
//! collisions, directs waves and produces GameStateSnapshots for the host.

pub mod director;
pub mod engine;
pub mod interfaces;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use invaders_core as core;
