//! Explosion animations
//!
//! Purely cosmetic; they never affect gameplay. Each one plays its eight frames
//! once and then asks to be removed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{EXPLOSION_FRAME_TICKS, EXPLOSION_FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSize {
    /// Enemy bolt striking the player
    Small,
    /// Ship destroyed
    Normal,
    /// Boss destroyed by ramming
    Boss,
}

impl ExplosionSize {
    /// Rendered edge length in pixels
    pub fn pixels(self) -> u32 {
        match self {
            ExplosionSize::Small => 30,
            ExplosionSize::Normal => 60,
            ExplosionSize::Boss => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub size: ExplosionSize,
    /// Current animation frame (0-based)
    pub frame: u32,
    /// Ticks spent on the current frame
    counter: u32,
}

impl Explosion {
    pub fn new(pos: Vec2, size: ExplosionSize) -> Self {
        Self {
            pos,
            size,
            frame: 0,
            counter: 0,
        }
    }

    /// Advance the animation clock by one tick
    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter >= EXPLOSION_FRAME_TICKS && self.frame < EXPLOSION_FRAMES - 1 {
            self.counter = 0;
            self.frame += 1;
        }
    }

    /// The last frame has been on screen for its full duration
    pub fn is_finished(&self) -> bool {
        self.frame >= EXPLOSION_FRAMES - 1 && self.counter >= EXPLOSION_FRAME_TICKS
    }
}
