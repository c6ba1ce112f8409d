//! Scripted input source: sweeps the player under the lowest alien and holds fire.

use invaders_core::state::GameStateSnapshot;
use invaders_core::types::InputState;
use invaders_sim::interfaces::InputSource;

/// Horizontal distance within which the autopilot stops steering.
const DEADBAND: f32 = 0.5;

/// Steers from the most recently observed snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    player_x: Option<f32>,
    target_x: Option<f32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a target from the latest snapshot.
    ///
    /// Prefers the lowest live alien (closest to the player), breaking ties
    /// by horizontal distance; falls back to the mothership.
    pub fn observe(&mut self, snapshot: &GameStateSnapshot) {
        self.player_x = snapshot.player.as_ref().map(|p| p.position.x);
        let player_x = self.player_x.unwrap_or(0.0);

        self.target_x = snapshot
            .aliens
            .iter()
            .filter(|alien| alien.live)
            .min_by(|a, b| {
                a.position
                    .y
                    .total_cmp(&b.position.y)
                    .then((a.position.x - player_x).abs().total_cmp(&(b.position.x - player_x).abs()))
            })
            .map(|alien| alien.position.x)
            .or_else(|| {
                snapshot
                    .mothership
                    .as_ref()
                    .filter(|boss| boss.live)
                    .map(|boss| boss.position.x)
            });
    }

    pub fn target_x(&self) -> Option<f32> {
        self.target_x
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> InputState {
        let (Some(player_x), Some(target_x)) = (self.player_x, self.target_x) else {
            return InputState::firing();
        };
        let offset = target_x - player_x;
        InputState {
            left: offset < -DEADBAND,
            right: offset > DEADBAND,
            fire: true,
        }
    }
}
