//! Hit application for the player, aliens and the mothership.
//!
//! Each call applies exactly one hit. Hits on disposed or unknown entities
//! are ignored, so repeated calls never double-count a destruction.

use hecs::Entity;
use rand::RngCore;
use tracing::{debug, info};

use invaders_ai::policy::hit_wobble;
use invaders_ai::profiles::{get_profile, Gunship};
use invaders_core::components::{HitPoints, Lifecycle, Transform};
use invaders_core::constants::MOTHERSHIP_HIT_EXPLOSION;
use invaders_core::enums::{CollisionTag, EntityKind, HitOutcome};
use invaders_core::events::GameEvent;

use crate::session::{mark_disposed, DirectorSignal, Session, SpawnRequest};

/// Apply one hit to whatever `entity` is.
pub fn hit(session: &mut Session, rng: &mut dyn RngCore, entity: Entity) -> HitOutcome {
    let kind = match session.world.get::<&EntityKind>(entity) {
        Ok(kind) => *kind,
        Err(_) => return HitOutcome::Ignored,
    };
    match kind {
        EntityKind::Alien => hit_gunship(session, rng, entity, Gunship::Alien),
        EntityKind::Mothership => hit_gunship(session, rng, entity, Gunship::Mothership),
        EntityKind::Player => hit_player(session, entity),
        EntityKind::PlayerProjectile | EntityKind::AlienProjectile | EntityKind::Explosion => {
            HitOutcome::Ignored
        }
    }
}

/// Decrement hit points; destroy and signal the director when they reach zero.
fn hit_gunship(
    session: &mut Session,
    rng: &mut dyn RngCore,
    entity: Entity,
    gunship: Gunship,
) -> HitOutcome {
    let Ok((transform, hp, life)) = session
        .world
        .query_one_mut::<(&mut Transform, &mut HitPoints, &mut Lifecycle)>(entity)
    else {
        return HitOutcome::Ignored;
    };
    if life.disposed || hp.current == 0 {
        return HitOutcome::Ignored;
    }

    hp.current -= 1;
    let position = transform.position;

    if hp.current == 0 {
        mark_disposed(life, entity, &mut session.removed);
        session.signals.push(match gunship {
            Gunship::Alien => DirectorSignal::AlienDestroyed { entity, position },
            Gunship::Mothership => DirectorSignal::MothershipDestroyed { entity, position },
        });
        debug!(?gunship, x = position.x, y = position.y, "Gunship destroyed");
        return HitOutcome::Destroyed;
    }

    let profile = get_profile(gunship);
    transform.orientation = hit_wobble(&profile, rng) * transform.orientation;

    let tag = match gunship {
        Gunship::Alien => CollisionTag::Alien,
        Gunship::Mothership => {
            session
                .spawns
                .push(SpawnRequest::explosion(position, MOTHERSHIP_HIT_EXPLOSION));
            CollisionTag::Mothership
        }
    };
    session.events.push(GameEvent::TargetHit {
        tag,
        hit_points_left: hp.current,
        position,
    });
    debug!(?gunship, hit_points = hp.current, "Gunship hit");
    HitOutcome::Survived
}

/// Any registered hit destroys the player.
fn hit_player(session: &mut Session, entity: Entity) -> HitOutcome {
    let Ok((transform, life)) = session
        .world
        .query_one_mut::<(&Transform, &mut Lifecycle)>(entity)
    else {
        return HitOutcome::Ignored;
    };
    if !mark_disposed(life, entity, &mut session.removed) {
        return HitOutcome::Ignored;
    }
    let position = transform.position;
    session
        .signals
        .push(DirectorSignal::PlayerDestroyed { entity, position });
    info!(x = position.x, "Player destroyed");
    HitOutcome::Destroyed
}
