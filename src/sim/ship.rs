//! State shared by every ship: hull, health, gun cooldown and bolts in flight

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::projectile::{Projectile, Side};
use super::sprite::SpriteKind;
use crate::consts::COOLDOWN_PERIOD;

/// Gun state derived from the cooldown counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cooldown {
    Ready,
    Recovering,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Not clamped; owners check `<= 0` after applying damage
    pub health: i32,
    pub cooldown_counter: u32,
    pub cooldown_period: u32,
    /// Bolts fired by this ship, oldest first
    pub projectiles: Vec<Projectile>,
    pub sprite: SpriteKind,
    pub laser_sprite: SpriteKind,
}

impl Ship {
    pub fn new(pos: Vec2, health: i32, sprite: SpriteKind, laser_sprite: SpriteKind) -> Self {
        Self {
            pos,
            health,
            cooldown_counter: 0,
            cooldown_period: COOLDOWN_PERIOD,
            projectiles: Vec::new(),
            sprite,
            laser_sprite,
        }
    }

    pub fn cooldown(&self) -> Cooldown {
        if self.cooldown_counter == 0 {
            Cooldown::Ready
        } else {
            Cooldown::Recovering
        }
    }

    /// One tick of the cooldown clock. The tick that fired already counts.
    pub fn update_cooldown(&mut self) {
        if self.cooldown_counter >= self.cooldown_period {
            self.cooldown_counter = 0;
        } else if self.cooldown_counter > 0 {
            self.cooldown_counter += 1;
        }
    }

    /// Spawn a bolt at the hull if the gun is ready. Returns whether it fired.
    pub fn fire(&mut self, side: Side) -> bool {
        if self.cooldown() != Cooldown::Ready {
            return false;
        }
        self.projectiles
            .push(Projectile::new(self.pos, side, self.laser_sprite));
        self.cooldown_counter = 1;
        true
    }

    /// Tick the cooldown, then move every bolt by `dy`.
    ///
    /// Off-screen bolts are dropped. Surviving bolts are handed to `resolve`,
    /// which applies any hit and returns true when the bolt was consumed.
    pub fn sweep_projectiles<F>(&mut self, dy: f32, screen_height: f32, mut resolve: F)
    where
        F: FnMut(&Projectile) -> bool,
    {
        self.update_cooldown();
        self.projectiles.retain_mut(|bolt| {
            bolt.advance(dy);
            if bolt.is_off_screen(screen_height) {
                return false;
            }
            !resolve(bolt)
        });
    }
}

impl Body for Ship {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> SpriteKind {
        self.sprite
    }
}
