//! Draw list generation
//!
//! The core never touches pixels. Each frame the host asks for a `DrawList`:
//! sprites in back-to-front order plus the HUD values to overlay. All positions
//! are sprite centres in playfield coordinates.

pub mod hud;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{ExplosionSize, GameState, Ship, SpriteKind};

pub use hud::Hud;

/// What to draw for one blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Graphic {
    Sprite(SpriteKind),
    /// One frame of an explosion sheet
    Explosion { size: ExplosionSize, frame: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blit {
    pub sprite: Graphic,
    pub pos: Vec2,
}

impl Blit {
    fn sprite(kind: SpriteKind, pos: Vec2) -> Self {
        Self {
            sprite: Graphic::Sprite(kind),
            pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub blits: Vec<Blit>,
    pub hud: Hud,
}

impl DrawList {
    /// Snapshot a session for drawing
    pub fn build(state: &GameState) -> Self {
        let mut blits = Vec::with_capacity(
            state.enemies.len() * 2 + state.player.ship.projectiles.len() + 1,
        );

        push_ship(&mut blits, &state.player.ship);
        for enemy in &state.enemies {
            push_ship(&mut blits, &enemy.ship);
        }
        for explosion in &state.fx.explosions {
            blits.push(Blit {
                sprite: Graphic::Explosion {
                    size: explosion.size,
                    frame: explosion.frame,
                },
                pos: explosion.pos,
            });
        }

        Self {
            blits,
            hud: Hud::from_state(state),
        }
    }
}

/// Lasers go under the ship that fired them
fn push_ship(blits: &mut Vec<Blit>, ship: &Ship) {
    for laser in &ship.projectiles {
        blits.push(Blit::sprite(laser.sprite, laser.pos));
    }
    blits.push(Blit::sprite(ship.sprite, ship.pos));
}
