//! The player's ship
//!
//! Movement follows either the pointer or the arrow/WASD keys, chosen when the
//! session starts. The player also carries the run's score, kill count, level
//! and the boss tally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::enemy::Enemy;
use super::events::{Fx, GameEvent};
use super::explosion::ExplosionSize;
use super::projectile::Side;
use super::ship::Ship;
use super::sprite::{SpriteKind, SpriteSet};
use super::tick::TickInput;
use crate::consts::*;

/// How the player steers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Ship snaps to the pointer
    Pointer,
    /// Fixed step per tick from directional keys
    #[default]
    Keyboard,
}

/// Boss damage, tracked on the attacker.
///
/// The boss entity has no health of its own. Only one boss is ever alive at a
/// time, so a single tally per run is enough; it is refilled whenever a boss
/// falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossTally {
    /// Remaining health against player bolts
    pub laser: i32,
    /// Remaining health against ramming
    pub ram: i32,
}

impl Default for BossTally {
    fn default() -> Self {
        Self {
            laser: BOSS_HEALTH,
            ram: BOSS_HEALTH,
        }
    }
}

impl BossTally {
    /// Register a bolt hit. Returns true if this hit brings the boss down.
    pub fn strike_laser(&mut self) -> bool {
        Self::step(&mut self.laser, BOSS_LASER_STEP)
    }

    /// Register a ram. Returns true if this ram brings the boss down.
    pub fn strike_ram(&mut self) -> bool {
        Self::step(&mut self.ram, BOSS_RAM_STEP)
    }

    fn step(health: &mut i32, amount: i32) -> bool {
        if *health - amount <= 0 {
            *health = BOSS_HEALTH;
            true
        } else {
            *health -= amount;
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub ship: Ship,
    pub max_health: i32,
    pub score: u64,
    pub kills: u32,
    pub level: u32,
    pub control: ControlMode,
    /// Keyboard step per tick
    pub speed: f32,
    pub boss: BossTally,
    /// Cleared when the player asks to leave the run
    pub alive: bool,
}

impl Player {
    pub fn new(pos: Vec2, control: ControlMode) -> Self {
        Self {
            ship: Ship::new(
                pos,
                PLAYER_MAX_HEALTH,
                SpriteKind::PlayerShip,
                SpriteKind::PlayerLaser,
            ),
            max_health: PLAYER_MAX_HEALTH,
            score: 0,
            kills: 0,
            level: 0,
            control,
            speed: PLAYER_SPEED,
            boss: BossTally::default(),
            alive: true,
        }
    }

    pub fn refill_health(&mut self) {
        self.ship.health = self.max_health;
    }

    /// Apply one tick of input: steer, shoot, or ask to leave
    pub fn advance(&mut self, input: &TickInput, sprites: &SpriteSet, screen: Vec2, fx: &mut Fx) {
        let (fire, exit) = match self.control {
            ControlMode::Pointer => {
                self.follow_pointer(input.pointer, sprites, screen);
                (input.primary || input.fire, input.secondary || input.exit)
            }
            ControlMode::Keyboard => {
                self.step_keys(input, sprites, screen);
                (input.fire, input.exit)
            }
        };

        if exit {
            self.alive = false;
            return;
        }

        if fire && self.ship.fire(Side::Player) {
            fx.emit(GameEvent::Fired(Side::Player));
        }
    }

    fn follow_pointer(&mut self, pointer: Option<Vec2>, sprites: &SpriteSet, screen: Vec2) {
        let Some(target) = pointer else { return };
        let half_w = sprites.width(self.ship.sprite) / 2.0;
        let inside = (half_w..=screen.x - half_w).contains(&target.x)
            && (0.0..=screen.y).contains(&target.y);
        if inside {
            self.ship.pos = target;
        }
    }

    fn step_keys(&mut self, input: &TickInput, sprites: &SpriteSet, screen: Vec2) {
        let w = sprites.width(self.ship.sprite);
        let h = sprites.height(self.ship.sprite);
        let v = self.speed;
        let pos = &mut self.ship.pos;

        if input.left && pos.x - v > w / 2.0 {
            pos.x -= v;
        }
        if input.right && pos.x + v + w / 2.0 < screen.x {
            pos.x += v;
        }
        if input.up && pos.y - v - h / 2.0 >= 0.0 {
            pos.y -= v;
        }
        if input.down && pos.y + v + h < screen.y {
            pos.y += v;
        }
    }

    /// Move the player's bolts up the screen and resolve hits on enemies.
    ///
    /// Each bolt strikes at most one enemy, the first in list order.
    pub fn resolve_laser_hits(
        &mut self,
        enemies: &mut Vec<Enemy>,
        sprites: &SpriteSet,
        dy: f32,
        screen_height: f32,
        fx: &mut Fx,
    ) {
        let Player {
            ship,
            score,
            kills,
            boss,
            ..
        } = self;

        ship.sweep_projectiles(dy, screen_height, |bolt| {
            let Some(index) = enemies
                .iter()
                .position(|enemy| bolt.hits(sprites, enemy.hitbox(sprites)))
            else {
                return false;
            };

            let enemy = &enemies[index];
            if enemy.tier().is_boss() {
                if boss.strike_laser() {
                    *score += BOSS_KILL_SCORE;
                    *kills += 1;
                    fx.explode(enemy.ship.pos, ExplosionSize::Boss);
                    fx.emit(GameEvent::BossDefeated);
                    log::info!("Boss destroyed, score {}", score);
                    enemies.remove(index);
                }
            } else {
                *score += KILL_SCORE;
                *kills += 1;
                fx.explode(enemy.ship.pos, ExplosionSize::Normal);
                enemies.remove(index);
            }
            true
        });
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.ship.pos
    }

    fn sprite(&self) -> SpriteKind {
        self.ship.sprite
    }
}
