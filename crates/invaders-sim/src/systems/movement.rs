//! Projectile and explosion integration.

use invaders_ai::policy;
use invaders_core::components::{Explosion, Lifecycle, Projectile, Transform};
use invaders_core::enums::Side;

use crate::session::{mark_disposed, Session};

/// Advance every live projectile of `side`; dispose those past the travel bound.
pub fn update_projectiles(session: &mut Session, side: Side, dt: f32) {
    let removed = &mut session.removed;
    for (entity, (transform, projectile, life)) in session
        .world
        .query_mut::<(&mut Transform, &Projectile, &mut Lifecycle)>()
    {
        if life.disposed || projectile.side != side {
            continue;
        }
        transform.position =
            policy::projectile_step(transform.position, projectile.axis, projectile.speed, dt);
        if policy::beyond_travel_bound(transform.position, projectile.axis) {
            mark_disposed(life, entity, removed);
        }
    }
}

/// Run explosion timers; dispose each once its duration has elapsed.
pub fn update_explosions(session: &mut Session, dt: f32) {
    let removed = &mut session.removed;
    for (entity, (explosion, life)) in session
        .world
        .query_mut::<(&mut Explosion, &mut Lifecycle)>()
    {
        if life.disposed {
            continue;
        }
        explosion.elapsed_secs += dt;
        if explosion.elapsed_secs >= explosion.duration_secs {
            mark_disposed(life, entity, removed);
        }
    }
}
