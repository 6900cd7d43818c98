//! Per-tick side effects: explosions spawned and events for audio/UI

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::explosion::{Explosion, ExplosionSize};
use super::projectile::Side;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ship fired a bolt
    Fired(Side),
    /// An explosion started
    Exploded(ExplosionSize),
    /// A life was spent (health depleted or an enemy slipped past)
    LifeLost,
    /// A new wave spawned for this level
    LevelStarted(u32),
    /// The boss banner is up
    BossIncoming,
    /// The boss went down
    BossDefeated,
    Paused,
    Resumed,
    /// Session ended
    GameOver { won: bool },
    /// Player quit back to the menu
    ReturnedToMenu,
}

/// Explosion list plus the event log for the current tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fx {
    pub explosions: Vec<Explosion>,
    pub events: Vec<GameEvent>,
}

impl Fx {
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn explode(&mut self, pos: Vec2, size: ExplosionSize) {
        self.explosions.push(Explosion::new(pos, size));
        self.emit(GameEvent::Exploded(size));
    }

    /// Advance every explosion one tick and drop the finished ones
    pub fn advance_explosions(&mut self) {
        for explosion in &mut self.explosions {
            explosion.advance();
        }
        self.explosions.retain(|e| !e.is_finished());
    }
}
