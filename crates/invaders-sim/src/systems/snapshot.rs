//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; disposed entities are left out.

use hecs::{Entity, World};

use invaders_core::components::*;
use invaders_core::events::GameEvent;
use invaders_core::state::*;

use crate::session::Session;
use crate::systems::actors::is_live;

/// Build a complete GameStateSnapshot from the session.
pub fn build_snapshot(session: &Session, events: Vec<GameEvent>) -> GameStateSnapshot {
    let world = &session.world;
    GameStateSnapshot {
        time: session.time,
        phase: session.phase,
        wave: session.director.wave(),
        wave_phase: session.director.phase(),
        game_over: session.is_game_over(),
        player: session.player.and_then(|player| build_player(world, player)),
        aliens: session
            .director
            .roster()
            .iter()
            .filter_map(|&alien| build_alien(world, alien))
            .collect(),
        mothership: session
            .director
            .mothership()
            .and_then(|boss| build_mothership(world, boss)),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        events,
    }
}

fn build_player(world: &World, player: Entity) -> Option<PlayerView> {
    let mut query = world
        .query_one::<(&Transform, &FireCooldown, &Lifecycle, &Model)>(player)
        .ok()?;
    let (transform, cooldown, life, model) = query.get()?;
    if life.disposed {
        return None;
    }
    Some(PlayerView {
        position: transform.position,
        fire_cooldown_secs: cooldown.remaining_secs.max(0.0),
        live: is_live(model),
    })
}

fn build_alien(world: &World, entity: Entity) -> Option<AlienView> {
    let mut query = world
        .query_one::<(&Alien, &Transform, &HitPoints, &Patrol, &Lifecycle, &Model)>(entity)
        .ok()?;
    let (alien, transform, hp, patrol, life, model) = query.get()?;
    if life.disposed {
        return None;
    }
    Some(AlienView {
        id: entity.to_bits().get(),
        subtype: alien.subtype,
        position: transform.position,
        hit_points: hp.current,
        direction: patrol.direction,
        live: is_live(model),
    })
}

fn build_mothership(world: &World, entity: Entity) -> Option<MothershipView> {
    let mut query = world
        .query_one::<(&Transform, &HitPoints, &Patrol, &Lifecycle, &Model)>(entity)
        .ok()?;
    let (transform, hp, patrol, life, model) = query.get()?;
    if life.disposed {
        return None;
    }
    Some(MothershipView {
        id: entity.to_bits().get(),
        position: transform.position,
        hit_points: hp.current,
        direction: patrol.direction,
        live: is_live(model),
    })
}

/// Projectiles ordered by owner id so equal worlds yield equal snapshots.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Transform, &Projectile, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, life))| !life.disposed)
        .map(|(entity, (transform, projectile, _))| {
            (
                entity.to_bits().get(),
                ProjectileView {
                    side: projectile.side,
                    position: transform.position,
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(id, _)| *id);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<(u64, ExplosionView)> = world
        .query::<(&Transform, &Explosion, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, life))| !life.disposed)
        .map(|(entity, (transform, explosion, _))| {
            let progress = if explosion.duration_secs > 0.0 {
                (explosion.elapsed_secs / explosion.duration_secs).clamp(0.0, 1.0)
            } else {
                1.0
            };
            (
                entity.to_bits().get(),
                ExplosionView {
                    position: transform.position,
                    magnitude: explosion.magnitude,
                    progress,
                },
            )
        })
        .collect();
    explosions.sort_by_key(|(id, _)| *id);
    explosions.into_iter().map(|(_, view)| view).collect()
}
