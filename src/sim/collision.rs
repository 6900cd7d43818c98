//! Pixel-precise collision detection
//!
//! Every entity is a mask centred on its position. Two entities collide when an
//! opaque pixel of one lands on an opaque pixel of the other.

use glam::Vec2;

use super::sprite::{Mask, SpriteKind, SpriteSet};

/// A mask placed in the world, centred at `pos`
#[derive(Debug, Clone, Copy)]
pub struct Hitbox<'a> {
    pub mask: &'a Mask,
    pub pos: Vec2,
}

impl<'a> Hitbox<'a> {
    pub fn new(mask: &'a Mask, pos: Vec2) -> Self {
        Self { mask, pos }
    }

    /// Top-left corner of the mask in world space
    #[inline]
    fn corner(&self) -> Vec2 {
        self.pos - Vec2::new(self.mask.width() as f32, self.mask.height() as f32) / 2.0
    }
}

/// Anything with a position and a sprite can be collision-tested
pub trait Body {
    fn pos(&self) -> Vec2;
    fn sprite(&self) -> SpriteKind;

    fn hitbox<'a>(&self, sprites: &'a SpriteSet) -> Hitbox<'a> {
        Hitbox::new(sprites.mask(self.sprite()), self.pos())
    }
}

/// Check whether two placed masks overlap.
///
/// The offset between corners is truncated toward zero, so swapping the
/// arguments negates it exactly and the test is symmetric.
pub fn collides(a: Hitbox<'_>, b: Hitbox<'_>) -> bool {
    let delta = b.corner() - a.corner();
    let offset = (delta.x as i32, delta.y as i32);
    a.mask.overlaps(b.mask, offset)
}

/// Convenience wrapper for two bodies sharing a sprite catalogue
pub fn bodies_collide(sprites: &SpriteSet, a: &impl Body, b: &impl Body) -> bool {
    collides(a.hitbox(sprites), b.hitbox(sprites))
}
