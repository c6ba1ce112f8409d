//! Compaction system: removes disposed entities from the world and the roster.

use invaders_core::components::Lifecycle;

use crate::session::Session;

/// Despawn every entity whose disposal flag is set.
/// Uses the session's pre-allocated buffer to avoid per-tick allocation.
pub fn run(session: &mut Session) {
    session.despawn_buffer.clear();

    for (entity, life) in session.world.query_mut::<&Lifecycle>() {
        if life.disposed {
            session.despawn_buffer.push(entity);
        }
    }

    for entity in session.despawn_buffer.drain(..) {
        let _ = session.world.despawn(entity);
    }

    session.director.compact(&session.world);
}
