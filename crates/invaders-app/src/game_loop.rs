//! Frame loop thread. Runs the simulation engine at a fixed frame rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive over an `mpsc` channel; the latest snapshot is stored in
//! shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use invaders_core::commands::SessionCommand;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::InputState;
use invaders_sim::interfaces::{InputSource, NullRenderer};
use invaders_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::config::RunConfig;
use crate::state::GameLoopCommand;

/// What a finished run achieved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub final_tick: u64,
    pub waves_cleared: u32,
    pub aliens_destroyed: u64,
    pub motherships_destroyed: u64,
    pub game_over: bool,
}

impl RunSummary {
    fn record(&mut self, snapshot: &GameStateSnapshot) {
        self.frames += 1;
        self.final_tick = snapshot.time.tick;
        self.waves_cleared = snapshot.wave;
        self.game_over = snapshot.game_over;
        for event in &snapshot.events {
            match event {
                GameEvent::AlienDestroyed { .. } => self.aliens_destroyed += 1,
                GameEvent::MothershipDestroyed { .. } => self.motherships_destroyed += 1,
                _ => {}
            }
        }
    }
}

/// Spawns the frame loop in a new thread.
///
/// `initial` is queued before the thread starts, so the first frame already sees it.
/// Returns the command sender and a handle yielding the run summary.
pub fn spawn_game_loop(
    config: RunConfig,
    initial: impl IntoIterator<Item = SessionCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    for command in initial {
        cmd_tx
            .send(GameLoopCommand::Session(command))
            .map_err(|_| anyhow!("frame loop channel closed before start"))?;
    }

    let handle = std::thread::Builder::new()
        .name("invaders-frame-loop".into())
        .spawn(move || run_game_loop(&config, cmd_rx, &latest_snapshot))
        .context("failed to spawn frame loop thread")?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until shutdown, channel disconnect, frame limit or game over.
pub fn run_game_loop(
    config: &RunConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(config.sim);
    let mut renderer = NullRenderer;
    let mut autopilot = Autopilot::new();
    let mut idle = InputState::idle();
    let mut summary = RunSummary::default();

    let dt = config.frame_delta();
    let frame_duration = Duration::from_secs_f32(dt);
    let mut next_frame_time = Instant::now();

    info!(seed = config.sim.seed, frame_rate = config.frame_rate, "Frame loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return finish(summary),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return finish(summary),
            }
        }

        // 2. Deliver assets, advance one frame, sync the scene
        let input: &mut dyn InputSource = if config.autopilot {
            &mut autopilot
        } else {
            &mut idle
        };
        let snapshot = engine.frame(dt, input);
        engine.render(&mut renderer);
        autopilot.observe(&snapshot);
        summary.record(&snapshot);

        for event in &snapshot.events {
            debug!(?event, "Game event");
        }
        let game_over = snapshot.game_over;

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if game_over || config.max_frames.is_some_and(|max| summary.frames >= max) {
            return finish(summary);
        }

        // 4. Sleep until the next frame when pacing against the clock
        if config.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    }
}

fn finish(summary: RunSummary) -> RunSummary {
    info!(
        frames = summary.frames,
        waves = summary.waves_cleared,
        game_over = summary.game_over,
        "Frame loop stopped"
    );
    summary
}
