//! Player preferences
//!
//! Persisted separately from scores as a small JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sim::{ControlMode, TickInput};

/// Maximum volume level
pub const MAX_VOLUME: u8 = 100;
/// Volume change per +/- key press
pub const VOLUME_STEP: u8 = 5;
/// Level restored when unmuting from zero
pub const UNMUTE_VOLUME: u8 = 50;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred steering
    pub control: ControlMode,

    // === Audio ===
    /// Volume level (0 - 100)
    pub volume: u8,
    pub muted: bool,
    /// Level to come back to after a mute toggle
    pub prev_volume: u8,

    // === Display ===
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlMode::Keyboard,
            volume: MAX_VOLUME,
            muted: false,
            prev_volume: UNMUTE_VOLUME,
            fullscreen: false,
        }
    }
}

impl Settings {
    /// Set the volume; zero mutes, anything above zero unmutes
    pub fn set_volume(&mut self, level: u8) {
        let level = level.min(MAX_VOLUME);
        if level == 0 {
            self.muted = true;
        } else if self.muted {
            self.muted = false;
            self.prev_volume = UNMUTE_VOLUME;
        }
        self.volume = level;
    }

    pub fn inc_volume(&mut self, amount: u8) {
        self.set_volume(self.volume.saturating_add(amount).min(MAX_VOLUME));
    }

    pub fn dec_volume(&mut self, amount: u8) {
        self.set_volume(self.volume.saturating_sub(amount));
    }

    pub fn toggle_mute(&mut self) {
        if self.muted {
            let restore = if self.prev_volume == 0 {
                UNMUTE_VOLUME
            } else {
                self.prev_volume
            };
            self.set_volume(restore);
        } else {
            self.prev_volume = self.volume;
            self.set_volume(0);
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Gain in 0.0 - 1.0 for the audio backend
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume as f32 / MAX_VOLUME as f32
        }
    }

    /// Apply the host-level toggles in a tick's input. Returns true if anything changed.
    pub fn apply_input(&mut self, input: &TickInput) -> bool {
        let before = self.clone();
        if input.mute {
            self.toggle_mute();
        }
        if input.volume_up {
            self.inc_volume(VOLUME_STEP);
        }
        if input.volume_down {
            self.dec_volume(VOLUME_STEP);
        }
        if input.fullscreen {
            self.toggle_fullscreen();
        }
        *self != before
    }

    /// Load settings, falling back to defaults if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings: {:#}", err);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}
