//! HUD values

use serde::{Deserialize, Serialize};

use crate::consts::BOSS_LEVEL;
use crate::sim::{Banner, GameState, SessionPhase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    /// Current level, shown as "level / final_level"
    pub level: u32,
    pub final_level: u32,
    pub score: u64,
    pub kills: u32,
    /// Player health bar fill, 0.0 - 1.0
    pub health: f32,
    /// Show the play button instead of pause
    pub paused: bool,
    pub banner: Option<Banner>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        let health = if player.max_health > 0 {
            (player.ship.health as f32 / player.max_health as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            lives: state.lives,
            level: player.level,
            final_level: BOSS_LEVEL,
            score: player.score,
            kills: player.kills,
            health,
            paused: state.phase == SessionPhase::Paused,
            banner: state.banner(),
        }
    }
}
