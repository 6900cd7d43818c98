//! Session state
//!
//! Everything a run needs lives here and is owned by `GameState`: the player,
//! the enemy wave, shared effects and the single seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, Tier};
use super::events::{Fx, GameEvent};
use super::player::{ControlMode, Player};
use super::sprite::SpriteSet;
use crate::consts::*;
use crate::highscores::{ScoreLedger, ScoreRecord};

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Running,
    Paused,
    /// Terminal
    Ended { won: bool },
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Boss cleared and level counter passed the final level
    Won,
    /// Out of lives
    Defeated,
    /// Player left for the menu
    Quit,
}

/// Banner the HUD should show over the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    BossLevel,
    Winner,
    GameOver,
}

/// Tunables for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub lives: u32,
    pub laser_speed: f32,
    pub enemy_speed: f32,
    /// Ticks per second; enemies fire about once per this many ticks
    pub tick_rate: u32,
    pub wave_growth: u32,
    pub boss_entry_hold_ticks: u32,
    pub end_linger_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            lives: STARTING_LIVES,
            laser_speed: LASER_SPEED,
            enemy_speed: ENEMY_SPEED,
            tick_rate: TICK_RATE,
            wave_growth: WAVE_GROWTH,
            boss_entry_hold_ticks: BOSS_ENTRY_HOLD_TICKS,
            end_linger_ticks: END_LINGER_TICKS,
        }
    }
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: SessionConfig,
    pub sprites: SpriteSet,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    pub end_reason: Option<EndReason>,
    pub player: Player,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Explosions and this tick's events
    pub fx: Fx,
    pub lives: u32,
    /// Enemies in the most recent regular wave
    pub wave_length: u32,
    /// Simulation tick counter (frozen while paused)
    pub time_ticks: u64,
    /// Ticks left on the boss entry banner; the world is frozen meanwhile
    pub hold_ticks: u32,
    /// Ticks left on the end banner before control returns to the menu
    pub linger_ticks: u32,
    pub(crate) boss_entry_pending: bool,
}

impl GameState {
    /// New run with default tuning and built-in sprite masks
    pub fn new(seed: u64, control: ControlMode) -> Self {
        Self::with_config(seed, control, SessionConfig::default(), SpriteSet::default())
    }

    pub fn with_config(
        seed: u64,
        control: ControlMode,
        config: SessionConfig,
        sprites: SpriteSet,
    ) -> Self {
        let start = Vec2::new(config.screen_width / 2.0, PLAYER_START_Y);
        log::info!("Session starting: seed {}, {:?} control", seed, control);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Running,
            end_reason: None,
            player: Player::new(start, control),
            enemies: Vec::new(),
            fx: Fx::default(),
            lives: config.lives,
            wave_length: 0,
            time_ticks: 0,
            hold_ticks: 0,
            linger_ticks: 0,
            boss_entry_pending: true,
            config,
            sprites,
        }
    }

    #[inline]
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.config.screen_width, self.config.screen_height)
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.fx.events
    }

    /// Session is over and its end banner has finished
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Ended { .. }) && self.linger_ticks == 0
    }

    pub fn banner(&self) -> Option<Banner> {
        match (self.phase, self.end_reason) {
            (SessionPhase::Ended { won: true }, _) => Some(Banner::Winner),
            (SessionPhase::Ended { .. }, Some(EndReason::Defeated)) => Some(Banner::GameOver),
            (SessionPhase::Ended { .. }, _) => None,
            _ if self.hold_ticks > 0 => Some(Banner::BossLevel),
            _ => None,
        }
    }

    /// Advance to the next level and spawn its wave
    pub(crate) fn spawn_wave(&mut self) {
        self.player.level += 1;
        self.wave_length += self.config.wave_growth;
        let level = self.player.level;

        // Past the boss there is nothing left to spawn; the next tick ends the run
        if level > BOSS_LEVEL {
            return;
        }

        let boss = level >= BOSS_LEVEL;
        let count = if boss { 1 } else { self.wave_length };
        let min_x = SPAWN_MIN_X as i32;
        let max_x = ((self.config.screen_width - SPAWN_RIGHT_MARGIN) as i32).max(min_x + 1);

        for _ in 0..count {
            let x = self.rng.random_range(min_x..max_x) as f32;
            let y = self.rng.random_range(SPAWN_MIN_Y..SPAWN_MAX_Y) as f32;
            let tier = if boss {
                Tier::Boss
            } else {
                Tier::WAVE_TIERS[self.rng.random_range(0..Tier::WAVE_TIERS.len())]
            };
            self.enemies.push(Enemy::new(Vec2::new(x, y), tier));
        }

        log::info!("Level {}: spawned {} enemies", level, count);
        self.fx.emit(GameEvent::LevelStarted(level));
    }

    /// Enter the terminal phase and record the run
    pub(crate) fn end(&mut self, reason: EndReason, ledger: &mut ScoreLedger) {
        let won = reason == EndReason::Won;
        let record = ScoreRecord {
            won,
            level: self.player.level,
            score: self.player.score,
            kills: self.player.kills,
        };
        log::info!("Session ended ({:?}): {:?}", reason, record);
        ledger.append(record);

        self.phase = SessionPhase::Ended { won };
        self.end_reason = Some(reason);
        self.fx.emit(GameEvent::GameOver { won });

        if reason == EndReason::Quit {
            self.player.alive = false;
            self.linger_ticks = 0;
            self.fx.emit(GameEvent::ReturnedToMenu);
        } else {
            self.linger_ticks = self.config.end_linger_ticks;
        }
    }
}
