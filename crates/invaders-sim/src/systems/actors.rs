//! Actor update system: player, formation aliens and the mothership.
//!
//! Actors without a loaded model are inert. Fire requests are queued as
//! spawns and materialize before projectiles move this tick.

use hecs::{Entity, World};
use rand::RngCore;

use invaders_ai::policy;
use invaders_ai::profiles::{get_profile, Gunship, GunshipProfile};
use invaders_core::components::*;
use invaders_core::enums::Side;
use invaders_core::types::{InputState, Orientation};

use crate::session::{Session, SpawnRequest};

/// Whether a model has been delivered.
pub fn is_live(model: &Model) -> bool {
    matches!(model.state, ModelState::Loaded { .. })
}

/// Move the player and gate its fire on the cooldown.
pub fn update_player(session: &mut Session, input: &InputState, dt: f32) {
    let Some(player) = session.player else {
        return;
    };
    let Ok((transform, cooldown, life, model)) = session
        .world
        .query_one_mut::<(&mut Transform, &mut FireCooldown, &Lifecycle, &Model)>(player)
    else {
        return;
    };
    if life.disposed || !is_live(model) {
        return;
    }

    transform.position = policy::player_step(transform.position, input, dt);

    let decision = policy::player_fire(cooldown.remaining_secs, input, dt);
    cooldown.remaining_secs = decision.cooldown_secs;
    if decision.fire {
        session.spawns.push(SpawnRequest::Projectile {
            side: Side::Player,
            origin: transform.position,
            orientation: Orientation::IDENTITY,
        });
    }
}

/// Update every live alien in roster order, then the mothership.
pub fn update_gunships(session: &mut Session, rng: &mut dyn RngCore, dt: f32) {
    let alien = get_profile(Gunship::Alien);
    for &entity in session.director.roster() {
        update_gunship(&mut session.world, &mut session.spawns, &alien, entity, rng, dt);
    }

    if let Some(entity) = session.director.mothership() {
        let boss = get_profile(Gunship::Mothership);
        update_gunship(&mut session.world, &mut session.spawns, &boss, entity, rng, dt);
    }
}

fn update_gunship(
    world: &mut World,
    spawns: &mut Vec<SpawnRequest>,
    profile: &GunshipProfile,
    entity: Entity,
    rng: &mut dyn RngCore,
    dt: f32,
) {
    let Ok((transform, patrol, cooldown, life, model)) = world.query_one_mut::<(
        &mut Transform,
        &mut Patrol,
        &mut FireCooldown,
        &Lifecycle,
        &Model,
    )>(entity) else {
        return;
    };
    if life.disposed || !is_live(model) {
        return;
    }

    let step = policy::patrol(profile, transform.position, patrol.direction, dt);
    transform.position = step.position;
    patrol.direction = step.direction;

    let decision = policy::gunship_fire(profile, cooldown.remaining_secs, dt, rng);
    cooldown.remaining_secs = decision.cooldown_secs;
    if decision.fire {
        spawns.push(SpawnRequest::Projectile {
            side: Side::Alien,
            origin: transform.position,
            orientation: transform.orientation,
        });
    }
}
