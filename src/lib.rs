//! Space Impact - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state machine)
//! - `autopilot`: Scripted input for headless runs
//! - `renderer`: Draw list handed to an external renderer
//! - `audio`: Sound ids and the one-shot playback boundary
//! - `highscores`: Append-only score ledger
//! - `persistence`: JSON store for the ledger
//! - `settings`: Player preferences (control mode, volume, fullscreen)

pub mod audio;
pub mod autopilot;
pub mod highscores;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::{ScoreLedger, ScoreRecord};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default viewport
    pub const SCREEN_WIDTH: f32 = 750.0;
    pub const SCREEN_HEIGHT: f32 = 750.0;

    /// Player spawn height
    pub const PLAYER_START_Y: f32 = 585.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Keyboard displacement per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const STARTING_LIVES: u32 = 5;

    /// Ticks between shots, shared by every ship
    pub const COOLDOWN_PERIOD: u32 = 25;
    /// Bolt displacement per tick (player bolts travel upward)
    pub const LASER_SPEED: f32 = 10.0;
    /// Enemy descent per tick
    pub const ENEMY_SPEED: f32 = 1.0;

    /// Enemies added to each successive wave
    pub const WAVE_GROWTH: u32 = 4;
    /// Level at which the boss replaces regular waves
    pub const BOSS_LEVEL: u32 = 10;

    /// Enemy spawn window
    pub const SPAWN_MIN_X: f32 = 50.0;
    /// Subtracted from the screen width for the exclusive upper x bound
    pub const SPAWN_RIGHT_MARGIN: f32 = 100.0;
    pub const SPAWN_MIN_Y: i32 = -1200;
    pub const SPAWN_MAX_Y: i32 = -100;

    /// Score awards
    pub const KILL_SCORE: u64 = 50;
    pub const BOSS_KILL_SCORE: u64 = 1000;

    /// Damage dealt to the player by ramming a regular enemy
    pub const RAM_DAMAGE: i32 = 10;
    /// Damage dealt to the player by ramming the boss
    pub const BOSS_RAM_DAMAGE: i32 = 100;

    /// Boss tally, tracked on the player
    pub const BOSS_HEALTH: i32 = 100;
    pub const BOSS_LASER_STEP: i32 = 10;
    pub const BOSS_RAM_STEP: i32 = 5;

    /// "BOSS LEVEL!!" banner hold (2 seconds)
    pub const BOSS_ENTRY_HOLD_TICKS: u32 = 2 * TICK_RATE;
    /// Win / game over banner linger (3 seconds)
    pub const END_LINGER_TICKS: u32 = 3 * TICK_RATE;

    /// Explosion animation
    pub const EXPLOSION_FRAMES: u32 = 8;
    pub const EXPLOSION_FRAME_TICKS: u32 = 4;
}
