//! Headless invaders runner.
//!
//! Usage:
//!   cargo run -p invaders-app -- --seed 7 --frames 1800
//!   RUST_LOG=debug cargo run -p invaders-app -- --config run.json --realtime true

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use invaders_app::config::RunConfig;
use invaders_app::game_loop::spawn_game_loop;
use invaders_app::state::AppState;
use invaders_core::commands::SessionCommand;

#[derive(Parser)]
#[command(name = "invaders")]
#[command(about = "Run the invaders simulation headless with a scripted pilot")]
struct Args {
    /// JSON run configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames; 0 runs until game over
    #[arg(long)]
    frames: Option<u64>,
    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: Option<bool>,
    /// Leave the player idle instead of using the autopilot
    #[arg(long)]
    no_autopilot: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    if let Some(frames) = args.frames {
        config.max_frames = (frames > 0).then_some(frames);
    }
    if let Some(realtime) = args.realtime {
        config.realtime = realtime;
    }
    if args.no_autopilot {
        config.autopilot = false;
    }

    let state = AppState::new();
    let seed = config.sim.seed;
    let (command_tx, handle) = spawn_game_loop(
        config,
        [SessionCommand::StartGame],
        Arc::clone(&state.latest_snapshot),
    )?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(command_tx);
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("frame loop thread panicked"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== RUN SUMMARY ===");
    println!("  Seed:                {seed}");
    println!("  Frames:              {}", summary.frames);
    println!("  Final tick:          {}", summary.final_tick);
    println!("  Waves cleared:       {}", summary.waves_cleared);
    println!("  Aliens destroyed:    {}", summary.aliens_destroyed);
    println!("  Motherships downed:  {}", summary.motherships_destroyed);
    println!(
        "  Outcome:             {}",
        if summary.game_over { "game over" } else { "stopped" }
    );
    if let Some(last) = state.snapshot() {
        println!("  Aliens remaining:    {}", last.aliens.len());
    }
    Ok(())
}
