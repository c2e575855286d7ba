//! Scripted stand-in for a human at the keyboard

use game_core::{FrameInput, RoundSnapshot};

/// Anything that can produce the keys held for the next tick
pub trait InputSource {
    fn next_input(&mut self, snapshot: &RoundSnapshot) -> FrameInput;
}

/// Simple bot: walk toward the nearest enemy and jump on it
///
/// Strategy:
/// 1. Head for the nearest enemy (center to center).
/// 2. Jump once it is within `trigger_distance` and the player is grounded.
/// 3. Keep drifting toward it while airborne so the fall lands on top.
/// 4. On game over, restart while rounds remain, otherwise quit.
pub struct Autopilot {
    rounds_remaining: u32,
    pub trigger_distance: f32,
}

impl Autopilot {
    pub const DEFAULT_TRIGGER_DISTANCE: f32 = 90.0;

    pub fn new(restarts: u32) -> Self {
        Self {
            rounds_remaining: restarts,
            trigger_distance: Self::DEFAULT_TRIGGER_DISTANCE,
        }
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }
}

impl InputSource for Autopilot {
    fn next_input(&mut self, snapshot: &RoundSnapshot) -> FrameInput {
        if snapshot.game_over {
            if self.rounds_remaining == 0 {
                return FrameInput {
                    quit: true,
                    ..FrameInput::new()
                };
            }
            self.rounds_remaining -= 1;
            return FrameInput {
                restart: true,
                ..FrameInput::new()
            };
        }

        let player = snapshot.player;
        let player_center = player.x + player.size / 2.0;

        let nearest = snapshot
            .enemies
            .iter()
            .map(|e| e.x + e.size / 2.0 - player_center)
            .min_by(|a, b| a.abs().total_cmp(&b.abs()));

        let Some(dx) = nearest else {
            return FrameInput::new();
        };

        FrameInput {
            left: dx < 0.0,
            right: dx > 0.0,
            jump: snapshot.player_on_ground && dx.abs() <= self.trigger_distance,
            restart: false,
            quit: false,
        }
    }
}
