//! Scripted pilot for headless runs and soak tests
//!
//! Reads the session and produces the input a simple player would: line up
//! under the lowest visible enemy and hold the trigger.

use glam::Vec2;

use crate::sim::{ControlMode, GameState, TickInput};

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Stop giving input after this tick and ask to leave instead
    pub quit_after: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_after(mut self, ticks: u64) -> Self {
        self.quit_after = Some(ticks);
        self
    }

    pub fn input(&self, state: &GameState) -> TickInput {
        let player = &state.player;
        let mut input = TickInput::default();

        if self.quit_after.is_some_and(|limit| state.time_ticks >= limit) {
            match player.control {
                ControlMode::Keyboard => input.exit = true,
                ControlMode::Pointer => input.secondary = true,
            }
            return input;
        }

        let Some(target) = lowest_enemy(state) else {
            return input;
        };

        match player.control {
            ControlMode::Keyboard => {
                let dx = target.x - player.ship.pos.x;
                input.left = dx < -player.speed;
                input.right = dx > player.speed;
                input.fire = true;
            }
            ControlMode::Pointer => {
                let half_w = state.sprites.width(player.ship.sprite) / 2.0;
                let x = target.x.clamp(half_w, state.config.screen_width - half_w);
                input.pointer = Some(Vec2::new(x, player.ship.pos.y));
                input.primary = true;
            }
        }
        input
    }
}

/// Closest on-screen enemy to the bottom edge
fn lowest_enemy(state: &GameState) -> Option<Vec2> {
    state
        .enemies
        .iter()
        .map(|e| e.ship.pos)
        .filter(|pos| pos.y > 0.0)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}
