//! ECS systems that operate on the session each tick.
//!
//! Systems are free functions over `&mut Session`. They hold no state of
//! their own; all state lives in components and the session.

pub mod actors;
pub mod assets;
pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod movement;
pub mod render_sync;
pub mod snapshot;
