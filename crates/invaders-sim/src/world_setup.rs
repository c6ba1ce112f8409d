//! Entity spawn factories.
//!
//! Creates the player, formation aliens, the mothership, projectiles and
//! explosions with their component bundles. Asset-backed entities start
//! inert and queue a model request.

use hecs::{Entity, World};
use rand::{Rng, RngCore};
use tracing::debug;

use invaders_ai::policy::{alien_projectile_axis, formation_cell, mothership_entry};
use invaders_ai::profiles::{get_profile, Gunship};
use invaders_core::components::*;
use invaders_core::constants::*;
use invaders_core::enums::*;
use invaders_core::events::GameEvent;
use invaders_core::types::{Orientation, Vector3};

use crate::interfaces::AssetRequest;
use crate::session::{Session, SpawnRequest};

fn pending_model(id: ModelId) -> Model {
    Model {
        id,
        state: ModelState::Pending,
    }
}

/// Spawn the player ship at its fixed start position.
pub fn spawn_player(world: &mut World, requests: &mut Vec<AssetRequest>) -> Entity {
    let entity = world.spawn((
        EntityKind::Player,
        Player,
        Transform {
            position: Vector3::from_array(PLAYER_SPAWN),
            orientation: Orientation::IDENTITY,
        },
        FireCooldown::default(),
        Lifecycle::default(),
        pending_model(ModelId::Player1),
    ));
    requests.push(AssetRequest {
        entity,
        model: ModelId::Player1,
    });
    entity
}

/// Spawn one formation alien.
pub fn spawn_alien(
    world: &mut World,
    requests: &mut Vec<AssetRequest>,
    position: Vector3,
    subtype: AlienSubtype,
) -> Entity {
    let profile = get_profile(Gunship::Alien);
    let entity = world.spawn((
        EntityKind::Alien,
        Alien { subtype },
        Transform {
            position,
            orientation: Orientation::IDENTITY,
        },
        HitPoints {
            current: profile.hit_points,
        },
        Patrol { direction: 1.0 },
        FireCooldown::default(),
        Lifecycle::default(),
        pending_model(subtype.model()),
    ));
    requests.push(AssetRequest {
        entity,
        model: subtype.model(),
    });
    entity
}

/// Spawn a full formation, row by row, each cell with a random subtype.
pub fn spawn_formation(
    world: &mut World,
    requests: &mut Vec<AssetRequest>,
    rng: &mut dyn RngCore,
) -> Vec<Entity> {
    let mut roster = Vec::with_capacity(FORMATION_ROWS * FORMATION_COLUMNS);
    for row in 0..FORMATION_ROWS {
        for column in 0..FORMATION_COLUMNS {
            let subtype = AlienSubtype::ALL[rng.gen_range(0..AlienSubtype::ALL.len())];
            roster.push(spawn_alien(
                world,
                requests,
                formation_cell(row, column),
                subtype,
            ));
        }
    }
    roster
}

/// Spawn the mothership at the edge matching its random start direction.
pub fn spawn_mothership(
    world: &mut World,
    requests: &mut Vec<AssetRequest>,
    rng: &mut dyn RngCore,
) -> (Entity, Vector3) {
    let profile = get_profile(Gunship::Mothership);
    let (position, direction) = mothership_entry(rng);
    let entity = world.spawn((
        EntityKind::Mothership,
        Mothership,
        Transform {
            position,
            orientation: Orientation::IDENTITY,
        },
        HitPoints {
            current: profile.hit_points,
        },
        Patrol { direction },
        FireCooldown::default(),
        Lifecycle::default(),
        pending_model(ModelId::Mothership),
    ));
    requests.push(AssetRequest {
        entity,
        model: ModelId::Mothership,
    });
    (entity, position)
}

/// Spawn a projectile ahead of its firer.
///
/// Player shots travel straight up; alien shots travel along the firer's
/// local "down" at the moment of firing.
pub fn spawn_projectile(
    world: &mut World,
    side: Side,
    origin: Vector3,
    orientation: Orientation,
) -> Entity {
    let (kind, axis, speed) = match side {
        Side::Player => (EntityKind::PlayerProjectile, Vector3::Y, PLAYER_PROJECTILE_SPEED),
        Side::Alien => (
            EntityKind::AlienProjectile,
            alien_projectile_axis(orientation),
            ALIEN_PROJECTILE_SPEED,
        ),
    };
    world.spawn((
        kind,
        Transform {
            position: origin + axis * PROJECTILE_SPAWN_OFFSET,
            orientation,
        },
        Projectile { side, axis, speed },
        Lifecycle::default(),
    ))
}

/// Spawn a visual explosion.
pub fn spawn_explosion(
    world: &mut World,
    position: Vector3,
    magnitude: f32,
    duration_secs: f32,
) -> Entity {
    world.spawn((
        EntityKind::Explosion,
        Transform {
            position,
            orientation: Orientation::IDENTITY,
        },
        Explosion {
            magnitude,
            duration_secs,
            elapsed_secs: 0.0,
        },
        Lifecycle::default(),
    ))
}

/// Create every queued entity.
pub fn flush_spawns(session: &mut Session) {
    for request in session.spawns.drain(..) {
        match request {
            SpawnRequest::Projectile {
                side,
                origin,
                orientation,
            } => {
                spawn_projectile(&mut session.world, side, origin, orientation);
                session
                    .events
                    .push(GameEvent::ProjectileFired { side, position: origin });
            }
            SpawnRequest::Explosion {
                position,
                magnitude,
                duration_secs,
            } => {
                spawn_explosion(&mut session.world, position, magnitude, duration_secs);
            }
        }
    }
}

/// Deploy the player and the first formation into an empty session.
pub fn setup_session(session: &mut Session, rng: &mut dyn RngCore) {
    session.player = Some(spawn_player(
        &mut session.world,
        &mut session.asset_requests,
    ));
    let roster = spawn_formation(&mut session.world, &mut session.asset_requests, rng);
    debug!(aliens = roster.len(), "Session deployed");
    session.director.deploy(roster);
    session.events.push(GameEvent::WaveStarted {
        wave: session.director.wave(),
    });
}
