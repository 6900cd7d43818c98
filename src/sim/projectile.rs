//! Laser bolts fired by ships

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Body, Hitbox, collides};
use super::sprite::{SpriteKind, SpriteSet};

/// Which side fired a bolt (decides its targets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A bolt in flight. Velocity is supplied by whoever moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub side: Side,
    pub sprite: SpriteKind,
}

impl Projectile {
    pub fn new(pos: Vec2, side: Side, sprite: SpriteKind) -> Self {
        Self { pos, side, sprite }
    }

    /// Move vertically; negative is upward
    #[inline]
    pub fn advance(&mut self, dy: f32) {
        self.pos.y += dy;
    }

    #[inline]
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y < 0.0 || self.pos.y > screen_height
    }

    pub fn hits(&self, sprites: &SpriteSet, target: Hitbox<'_>) -> bool {
        collides(self.hitbox(sprites), target)
    }
}

impl Body for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> SpriteKind {
        self.sprite
    }
}
