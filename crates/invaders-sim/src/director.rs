//! Wave director. Owns the alien roster, the mothership slot and the wave counter.
//!
//! `WaveInProgress` (roster non-empty) → `BossPending` (roster empty, no
//! mothership) → `BossActive` (mothership present) → `WaveInProgress` with a
//! fresh roster once the mothership is destroyed.

use hecs::{Entity, World};
use rand::RngCore;
use tracing::{debug, info};

use invaders_core::components::Lifecycle;
use invaders_core::constants::{
    ALIEN_DESTROYED_EXPLOSION, MOTHERSHIP_DESTROYED_EXPLOSION, PLAYER_DESTROYED_EXPLOSION,
};
use invaders_core::enums::WavePhase;
use invaders_core::events::GameEvent;

use crate::session::{DirectorSignal, Session, SpawnRequest};
use crate::world_setup;

/// Roster, boss slot and wave counter.
#[derive(Debug, Clone, Default)]
pub struct WaveDirector {
    /// Live aliens in formation order.
    roster: Vec<Entity>,
    mothership: Option<Entity>,
    wave: u32,
}

impl WaveDirector {
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn mothership(&self) -> Option<Entity> {
        self.mothership
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> WavePhase {
        match (self.roster.is_empty(), self.mothership) {
            (false, _) => WavePhase::WaveInProgress,
            (true, None) => WavePhase::BossPending,
            (true, Some(_)) => WavePhase::BossActive,
        }
    }

    /// Install a freshly spawned formation.
    pub fn deploy(&mut self, roster: Vec<Entity>) {
        self.roster = roster;
    }

    /// Drop roster entries and the boss slot when their entity no longer exists or is disposed.
    pub fn compact(&mut self, world: &World) {
        self.roster.retain(|&alien| is_present(world, alien));
        if self.mothership.is_some_and(|boss| !is_present(world, boss)) {
            debug!("Mothership slot cleared without destruction");
            self.mothership = None;
        }
    }
}

fn is_present(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map(|life| !life.disposed)
        .unwrap_or(false)
}

/// React to the destruction signals raised this tick, then advance the wave state.
pub fn run(session: &mut Session, rng: &mut dyn RngCore) {
    for signal in std::mem::take(&mut session.signals) {
        match signal {
            DirectorSignal::AlienDestroyed { entity, position } => {
                session.director.roster.retain(|&alien| alien != entity);
                session
                    .spawns
                    .push(SpawnRequest::explosion(position, ALIEN_DESTROYED_EXPLOSION));
                session.events.push(GameEvent::AlienDestroyed { position });
                debug!(
                    remaining = session.director.roster.len(),
                    "Alien destroyed"
                );
            }
            DirectorSignal::MothershipDestroyed { entity, position } => {
                if session.director.mothership != Some(entity) {
                    continue;
                }
                session.director.mothership = None;
                session
                    .spawns
                    .push(SpawnRequest::explosion(position, MOTHERSHIP_DESTROYED_EXPLOSION));
                session
                    .events
                    .push(GameEvent::MothershipDestroyed { position });
                advance_wave(session, rng);
            }
            // The engine flips the session to game over once the director has run.
            DirectorSignal::PlayerDestroyed { position, .. } => {
                session
                    .spawns
                    .push(SpawnRequest::explosion(position, PLAYER_DESTROYED_EXPLOSION));
                session.events.push(GameEvent::PlayerDestroyed { position });
            }
        }
    }

    if session.director.phase() == WavePhase::BossPending {
        let (entity, position) = world_setup::spawn_mothership(
            &mut session.world,
            &mut session.asset_requests,
            rng,
        );
        session.director.mothership = Some(entity);
        session.events.push(GameEvent::MothershipSpawned { position });
        info!(wave = session.director.wave, x = position.x, "Mothership spawned");
    }
}

/// Count the completed wave and deploy the next formation.
fn advance_wave(session: &mut Session, rng: &mut dyn RngCore) {
    session.director.wave += 1;
    let roster =
        world_setup::spawn_formation(&mut session.world, &mut session.asset_requests, rng);
    session.director.deploy(roster);
    session.events.push(GameEvent::WaveStarted {
        wave: session.director.wave,
    });
    info!(wave = session.director.wave, "Wave started");
}
