//! Headless host for the invaders simulation.
//!
//! Drives the engine from a fixed-rate frame loop thread, feeds it input
//! from a scripted autopilot and publishes the latest snapshot for polling.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use invaders_core as core;
