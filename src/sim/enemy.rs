//! Enemy ships
//!
//! Four tiers with fixed looks and firepower. Enemies only ever move straight
//! down; the session decides when they try to shoot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::events::Fx;
use super::explosion::ExplosionSize;
use super::player::Player;
use super::projectile::Side;
use super::ship::Ship;
use super::sprite::{SpriteKind, SpriteSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Boss,
}

impl Tier {
    /// Tiers drawn for regular waves
    pub const WAVE_TIERS: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn ship_sprite(self) -> SpriteKind {
        match self {
            Tier::Easy => SpriteKind::EasyShip,
            Tier::Medium => SpriteKind::MediumShip,
            Tier::Hard => SpriteKind::HardShip,
            Tier::Boss => SpriteKind::BossShip,
        }
    }

    pub fn laser_sprite(self) -> SpriteKind {
        match self {
            Tier::Easy => SpriteKind::RedLaser,
            Tier::Medium => SpriteKind::BlueLaser,
            Tier::Hard => SpriteKind::GreenLaser,
            Tier::Boss => SpriteKind::FlameLaser,
        }
    }

    /// Health the player loses per bolt
    pub fn damage(self) -> i32 {
        match self {
            Tier::Easy => 10,
            Tier::Medium => 18,
            Tier::Hard => 25,
            Tier::Boss => 100,
        }
    }

    #[inline]
    pub fn is_boss(self) -> bool {
        self == Tier::Boss
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub ship: Ship,
    tier: Tier,
}

impl Enemy {
    pub fn new(pos: Vec2, tier: Tier) -> Self {
        Self {
            ship: Ship::new(pos, 100, tier.ship_sprite(), tier.laser_sprite()),
            tier,
        }
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn descend(&mut self, dy: f32) {
        self.ship.pos.y += dy;
    }

    /// Fire if on screen and the gun is ready
    pub fn fire(&mut self) -> bool {
        if self.ship.pos.y <= 0.0 {
            return false;
        }
        self.ship.fire(Side::Enemy)
    }

    /// Move this enemy's bolts and apply any that strike the player
    pub fn resolve_laser_hits(
        &mut self,
        player: &mut Player,
        sprites: &SpriteSet,
        dy: f32,
        screen_height: f32,
        fx: &mut Fx,
    ) {
        let damage = self.tier.damage();
        let target = player.ship.hitbox(sprites);
        let mut hits = 0;
        self.ship.sweep_projectiles(dy, screen_height, |bolt| {
            if bolt.hits(sprites, target) {
                fx.explode(bolt.pos, ExplosionSize::Small);
                hits += 1;
                true
            } else {
                false
            }
        });
        if hits > 0 {
            player.ship.health -= damage * hits;
            log::debug!(
                "{:?} hit player {} time(s), health now {}",
                self.tier,
                hits,
                player.ship.health
            );
        }
    }

    /// True once the hull's lower edge has passed the bottom of the screen
    pub fn has_escaped(&self, sprites: &SpriteSet, screen_height: f32) -> bool {
        self.ship.pos.y + sprites.height(self.ship.sprite) / 2.0 > screen_height
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.ship.pos
    }

    fn sprite(&self) -> SpriteKind {
        self.ship.sprite
    }
}
