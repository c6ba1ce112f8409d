//! Simulation engine. Drives one game session tick by tick.
//!
//! `SimulationEngine` owns the session, the random source and the asset
//! loader, applies session commands at tick boundaries, runs every system in
//! a fixed order and produces `GameStateSnapshot`s. Completely headless, so
//! runs are deterministic for a given seed and input sequence.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use invaders_core::commands::SessionCommand;
use invaders_core::components::Lifecycle;
use invaders_core::enums::{GamePhase, HitOutcome, Side};
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::{InputState, SimTime};

use crate::director::{self, WaveDirector};
use crate::interfaces::{AssetLoader, BuiltinModels, InputSource, RenderHandle, Renderer};
use crate::session::{mark_disposed, Session};
use crate::systems;
use crate::systems::collision::CollisionTarget;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Multiplier applied to every frame delta (1.0 = normal).
    pub time_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the session and everything that feeds it.
pub struct SimulationEngine {
    session: Session,
    rng: Box<dyn RngCore + Send>,
    loader: Box<dyn AssetLoader + Send>,
    command_queue: VecDeque<SessionCommand>,
    time_scale: f32,
}

impl SimulationEngine {
    /// Create an engine seeded from `config`, loading models from the built-in table.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config, Box::new(ChaCha8Rng::seed_from_u64(config.seed)))
    }

    /// Create an engine drawing from an arbitrary random source.
    pub fn with_rng(config: SimConfig, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            session: Session::new(),
            rng,
            loader: Box::new(BuiltinModels::new()),
            command_queue: VecDeque::new(),
            time_scale: sanitize_scale(config.time_scale),
        }
    }

    /// Replace the asset loader.
    pub fn with_loader(mut self, loader: Box<dyn AssetLoader + Send>) -> Self {
        self.loader = loader;
        self
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Hand queued model requests to the loader and apply every completion it has ready.
    ///
    /// Must be called between ticks; models never change state mid-tick.
    pub fn pump_assets(&mut self) {
        for request in self.session.asset_requests.drain(..) {
            self.loader.request(request);
        }
        for response in self.loader.poll() {
            systems::assets::apply_response(&mut self.session, response);
        }
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32, input: &mut dyn InputSource) -> GameStateSnapshot {
        self.process_commands();

        if self.session.phase == GamePhase::Active {
            let dt = self.scaled_delta(dt);
            let controls = input.poll();
            self.run_systems(dt, &controls);
            self.session.time.advance(dt);
        }

        self.take_snapshot()
    }

    /// One host frame: deliver finished assets, then tick.
    pub fn frame(&mut self, dt: f32, input: &mut dyn InputSource) -> GameStateSnapshot {
        self.pump_assets();
        self.tick(dt, input)
    }

    /// Push placements and removals to the renderer.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        systems::render_sync::sync(&mut self.session, renderer);
    }

    /// Snapshot of the current state without consuming pending events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.session, Vec::new())
    }

    /// Apply one hit to `entity`. Destruction is handed to the wave director at once.
    pub fn hit(&mut self, entity: Entity) -> HitOutcome {
        if self.session.phase != GamePhase::Active {
            return HitOutcome::Ignored;
        }
        let outcome = systems::damage::hit(&mut self.session, &mut *self.rng, entity);
        self.settle();
        outcome
    }

    /// Mark `entity` disposed. Returns false if it was already disposed or does not exist.
    pub fn dispose(&mut self, entity: Entity) -> bool {
        match self.session.world.query_one_mut::<&mut Lifecycle>(entity) {
            Ok(life) => mark_disposed(life, entity, &mut self.session.removed),
            Err(_) => false,
        }
    }

    /// Register a collision between `projectile` and `target`.
    pub fn handle_collision(&mut self, projectile: Entity, target: CollisionTarget) -> HitOutcome {
        if self.session.phase != GamePhase::Active {
            return HitOutcome::Ignored;
        }
        let outcome = systems::collision::handle_collision(
            &mut self.session,
            &mut *self.rng,
            projectile,
            target,
        );
        self.settle();
        outcome
    }

    /// Map a render handle back to the entity it shows.
    pub fn resolve_handle(&self, handle: RenderHandle) -> Option<CollisionTarget> {
        let owner = handle.owner()?;
        if !self.session.world.contains(owner) {
            return None;
        }
        Some(CollisionTarget::resolve(&self.session.world, owner))
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Number of completed waves.
    pub fn wave(&self) -> u32 {
        self.session.director.wave()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.session.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.session.world
    }

    pub fn director(&self) -> &WaveDirector {
        &self.session.director
    }

    /// The player entity, once a game has started.
    pub fn player(&self) -> Option<Entity> {
        self.session.player
    }

    /// Replace the deployed roster with `count` aliens laid out from the bottom formation row.
    #[cfg(test)]
    pub fn deploy_test_roster(&mut self, count: usize) -> Vec<Entity> {
        use invaders_ai::policy::formation_cell;
        use invaders_core::constants::FORMATION_COLUMNS;
        use invaders_core::enums::AlienSubtype;

        for &alien in self.session.director.roster() {
            let _ = self.session.world.despawn(alien);
        }
        let roster: Vec<Entity> = (0..count)
            .map(|i| {
                world_setup::spawn_alien(
                    &mut self.session.world,
                    &mut self.session.asset_requests,
                    formation_cell(i / FORMATION_COLUMNS, i % FORMATION_COLUMNS),
                    AlienSubtype::Scout,
                )
            })
            .collect();
        self.session.director.deploy(roster.clone());
        roster
    }

    /// Mutable access to the session (for tests that stage positions).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single session command.
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::StartGame => {
                if self.session.phase == GamePhase::Title {
                    self.start_session();
                }
            }
            SessionCommand::Restart => {
                if self.session.phase != GamePhase::Title {
                    self.start_session();
                }
            }
        }
    }

    /// Replace the session with a freshly deployed one.
    ///
    /// Everything the old session showed is queued for removal from the renderer.
    fn start_session(&mut self) {
        let mut fresh = Session::new();
        fresh.removed = std::mem::take(&mut self.session.removed);
        fresh
            .removed
            .extend(self.session.world.iter().map(|entity| entity.entity()));
        world_setup::setup_session(&mut fresh, &mut *self.rng);
        fresh.phase = GamePhase::Active;
        self.session = fresh;
        info!("Session started");
    }

    /// Reject negative or non-finite deltas, then apply the time scale.
    fn scaled_delta(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "Invalid frame delta clamped to zero");
            return 0.0;
        }
        dt * self.time_scale
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, controls: &InputState) {
        let session = &mut self.session;
        let rng: &mut dyn RngCore = &mut *self.rng;

        // 1. Actors
        systems::actors::update_player(session, controls, dt);
        systems::actors::update_gunships(session, rng, dt);
        world_setup::flush_spawns(session);
        // 2. Projectiles, player side first
        systems::movement::update_projectiles(session, Side::Player, dt);
        systems::movement::update_projectiles(session, Side::Alien, dt);
        // 3. Effects
        systems::movement::update_explosions(session, dt);
        // 4. Compaction
        systems::cleanup::run(session);
        // 5. Collision pass
        systems::collision::run(session, rng);
        // 6. Wave director, game-over check, deferred spawns
        self.settle();
    }

    /// Hand destruction signals to the director, then latch game over if the player is gone.
    fn settle(&mut self) {
        director::run(&mut self.session, &mut *self.rng);
        world_setup::flush_spawns(&mut self.session);

        if let Some(player) = self.session.player {
            if self.session.phase == GamePhase::Active && self.session.is_disposed(player) {
                self.session.phase = GamePhase::GameOver;
                info!(
                    tick = self.session.time.tick,
                    wave = self.session.director.wave(),
                    "Game over"
                );
            }
        }
    }

    /// Snapshot carrying every event collected since the previous one.
    fn take_snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.session.events);
        systems::snapshot::build_snapshot(&self.session, events)
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(0.0, 4.0)
    } else {
        1.0
    }
}
