//! Collision resolver. Casts a short ray ahead of every live projectile
//! against the opposing side's collision surfaces.
//!
//! Player projectiles are resolved first (against aliens and the mothership),
//! then alien projectiles (against the player). Each projectile yields at most
//! one collision per tick: the nearest intersection along its ray.

use hecs::{Entity, World};
use rand::RngCore;
use tracing::debug;

use invaders_core::components::{Lifecycle, Model, ModelState, Projectile, Transform};
use invaders_core::constants::{COLLISION_RAY_LENGTH, IMPACT_EXPLOSION, PLAYER_IMPACT_EXPLOSION};
use invaders_core::enums::{CollisionTag, EntityKind, HitOutcome, Side};
use invaders_core::events::GameEvent;
use invaders_core::types::{Aabb, Vector3};

use crate::session::{mark_disposed, Session, SpawnRequest};
use crate::systems::damage;

/// What a projectile struck, as resolved from the surface's owner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionTarget {
    pub owner: Option<Entity>,
    /// `None` when the struck surface carries no recognizable type tag.
    pub tag: Option<CollisionTag>,
}

impl CollisionTarget {
    /// Look up the owner's tag in the world.
    pub fn resolve(world: &World, owner: Entity) -> Self {
        let tag = world.get::<&EntityKind>(owner).ok().and_then(|kind| tag_of(*kind));
        Self {
            owner: Some(owner),
            tag,
        }
    }
}

/// Collision tag carried by an entity kind, if it has a surface.
pub fn tag_of(kind: EntityKind) -> Option<CollisionTag> {
    match kind {
        EntityKind::Player => Some(CollisionTag::Player),
        EntityKind::Alien => Some(CollisionTag::Alien),
        EntityKind::Mothership => Some(CollisionTag::Mothership),
        EntityKind::PlayerProjectile | EntityKind::AlienProjectile | EntityKind::Explosion => None,
    }
}

/// A collision surface with its owner id.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub owner: Entity,
    pub tag: CollisionTag,
    pub bounds: Aabb,
}

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub owner: Entity,
    pub tag: CollisionTag,
    pub distance: f32,
    pub point: Vector3,
}

/// Nearest surface hit by a ray of length `max_distance`. Ties keep the first surface.
pub fn cast_ray(
    surfaces: &[Surface],
    origin: Vector3,
    direction: Vector3,
    max_distance: f32,
) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;
    for surface in surfaces {
        let Some(distance) = surface.bounds.ray_distance(origin, direction, max_distance) else {
            continue;
        };
        if nearest.is_some_and(|best| best.distance <= distance) {
            continue;
        }
        nearest = Some(RayHit {
            owner: surface.owner,
            tag: surface.tag,
            distance,
            point: origin + direction * distance,
        });
    }
    nearest
}

/// Collision surface of a live, loaded entity.
fn surface_of(world: &World, owner: Entity, tag: CollisionTag) -> Option<Surface> {
    let mut query = world
        .query_one::<(&Transform, &Model, &Lifecycle)>(owner)
        .ok()?;
    let (transform, model, life) = query.get()?;
    if life.disposed {
        return None;
    }
    let ModelState::Loaded { half_extents } = model.state else {
        return None;
    };
    Some(Surface {
        owner,
        tag,
        bounds: Aabb::from_center(transform.position, half_extents),
    })
}

/// Surfaces of every live alien and, if present, the mothership.
fn gunship_surfaces(session: &Session) -> Vec<Surface> {
    let mut surfaces: Vec<Surface> = session
        .director
        .roster()
        .iter()
        .filter_map(|&alien| surface_of(&session.world, alien, CollisionTag::Alien))
        .collect();
    if let Some(boss) = session.director.mothership() {
        surfaces.extend(surface_of(&session.world, boss, CollisionTag::Mothership));
    }
    surfaces
}

/// Live projectiles of one side with their ray origin and direction.
fn live_projectiles(world: &World, side: Side) -> Vec<(Entity, Vector3, Vector3)> {
    world
        .query::<(&Transform, &Projectile, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, projectile, life))| projectile.side == side && !life.disposed)
        .map(|(entity, (transform, projectile, _))| {
            (entity, transform.position, projectile.axis)
        })
        .collect()
}

/// Run the resolver pass for this tick.
pub fn run(session: &mut Session, rng: &mut dyn RngCore) {
    // Player projectiles against aliens and the mothership.
    let mut surfaces = gunship_surfaces(session);
    for (projectile, origin, axis) in live_projectiles(&session.world, Side::Player) {
        surfaces.retain(|surface| !session.is_disposed(surface.owner));
        let Some(hit) = cast_ray(&surfaces, origin, axis, COLLISION_RAY_LENGTH) else {
            continue;
        };
        debug!(tag = ?hit.tag, x = hit.point.x, y = hit.point.y, "Player projectile hit");
        session
            .spawns
            .push(SpawnRequest::explosion(hit.point, IMPACT_EXPLOSION));
        handle_collision(
            session,
            rng,
            projectile,
            CollisionTarget {
                owner: Some(hit.owner),
                tag: Some(hit.tag),
            },
        );
    }

    // Alien projectiles against the player only.
    for (projectile, origin, axis) in live_projectiles(&session.world, Side::Alien) {
        let Some(player) = session.player else {
            break;
        };
        let Some(surface) = surface_of(&session.world, player, CollisionTag::Player) else {
            break;
        };
        let Some(hit) = cast_ray(&[surface], origin, axis, COLLISION_RAY_LENGTH) else {
            continue;
        };
        session
            .spawns
            .push(SpawnRequest::explosion(hit.point, PLAYER_IMPACT_EXPLOSION));
        handle_collision(
            session,
            rng,
            projectile,
            CollisionTarget {
                owner: Some(hit.owner),
                tag: Some(hit.tag),
            },
        );
    }
}

/// Apply a registered collision to a projectile and its target, then dispose the projectile.
///
/// Player projectiles damage aliens and the mothership; alien projectiles
/// destroy the player. Either kind removes a barrier. An untagged or
/// unrelated target only disposes the projectile. Calls on a projectile that
/// is already disposed do nothing.
pub fn handle_collision(
    session: &mut Session,
    rng: &mut dyn RngCore,
    projectile: Entity,
    target: CollisionTarget,
) -> HitOutcome {
    let side = {
        let Ok((state, life)) = session
            .world
            .query_one_mut::<(&Projectile, &mut Lifecycle)>(projectile)
        else {
            return HitOutcome::Ignored;
        };
        if !mark_disposed(life, projectile, &mut session.removed) {
            return HitOutcome::Ignored;
        }
        state.side
    };

    let Some(tag) = target.tag else {
        debug!("Collision with untagged surface");
        return HitOutcome::Ignored;
    };

    match (side, tag) {
        (Side::Player, CollisionTag::Alien | CollisionTag::Mothership)
        | (Side::Alien, CollisionTag::Player) => match target.owner {
            Some(owner) => damage::hit(session, rng, owner),
            None => HitOutcome::Ignored,
        },
        // Barriers live outside the world; the host removes them on this event.
        (_, CollisionTag::Barrier) => {
            session.events.push(GameEvent::BarrierDestroyed {
                surface: target.owner.map(|owner| owner.to_bits().get()),
            });
            HitOutcome::Destroyed
        }
        _ => HitOutcome::Ignored,
    }
}
