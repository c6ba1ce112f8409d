//! Run configuration, loaded from JSON. Every field has a default.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use invaders_core::constants::FRAME_RATE;
use invaders_sim::SimConfig;

/// How one headless run is driven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sim: SimConfig,
    /// Stop after this many frames. `None` runs until game over or shutdown.
    pub max_frames: Option<u64>,
    /// Frames per second of the loop.
    pub frame_rate: u32,
    /// Pace frames against the wall clock instead of running flat out.
    pub realtime: bool,
    /// Steer the player with the built-in autopilot; otherwise the player idles.
    pub autopilot: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            max_frames: Some(3_600),
            frame_rate: FRAME_RATE,
            realtime: false,
            autopilot: true,
        }
    }
}

impl RunConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&text)
            .with_context(|| format!("invalid config JSON: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.frame_rate > 0, "frame_rate must be positive");
        ensure!(
            self.sim.time_scale.is_finite() && self.sim.time_scale >= 0.0,
            "sim.time_scale must be a non-negative number"
        );
        Ok(())
    }

    /// Seconds per frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.sim.seed, 42);
        assert!(config.autopilot);
        assert!((config.frame_delta() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sim": {{"seed": 7}}, "max_frames": 120}}"#).unwrap();

        let config = RunConfig::load(file.path()).unwrap();
        assert_eq!(config.sim.seed, 7);
        assert_eq!(config.sim.time_scale, 1.0);
        assert_eq!(config.max_frames, Some(120));
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = RunConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config JSON"));
    }

    #[test]
    fn test_load_rejects_zero_frame_rate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"frame_rate": 0}}"#).unwrap();
        assert!(RunConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = RunConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
