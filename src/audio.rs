//! Audio boundary
//!
//! The simulation never plays sound itself. Each tick leaves a list of
//! `GameEvent`s behind; `dispatch` turns the audible ones into one-shot effects
//! for whatever backend the host plugs in.

use crate::settings::Settings;
use crate::sim::{ExplosionSize, GameEvent, Side, TickInput};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player bolt leaves the ship
    PlayerLaser,
    /// Enemy bolt leaves the ship
    EnemyLaser,
    /// A ship blows up
    Explode,
    /// Enemy bolt strikes the player
    LaserHit,
}

impl SoundEffect {
    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Fired(Side::Player) => Some(SoundEffect::PlayerLaser),
            GameEvent::Fired(Side::Enemy) => Some(SoundEffect::EnemyLaser),
            GameEvent::Exploded(ExplosionSize::Small) => Some(SoundEffect::LaserHit),
            GameEvent::Exploded(_) => Some(SoundEffect::Explode),
            _ => None,
        }
    }
}

/// Backend that can play a one-shot effect
pub trait AudioSink {
    fn play_one_shot(&mut self, effect: SoundEffect);

    /// Gain for subsequent effects (0.0 - 1.0)
    fn set_volume(&mut self, _volume: f32) {}
}

/// Play every audible event from the last tick. Returns how many effects played.
pub fn dispatch(events: &[GameEvent], sink: &mut impl AudioSink) -> usize {
    let mut played = 0;
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play_one_shot(effect);
        played += 1;
    }
    played
}

/// Push the current volume/mute preference to a sink
pub fn apply_settings(settings: &Settings, sink: &mut impl AudioSink) {
    sink.set_volume(settings.effective_volume());
}

/// Apply a tick's mute/volume/fullscreen keys and push any volume change to the sink.
/// Returns true if the settings changed.
pub fn apply_input(settings: &mut Settings, input: &TickInput, sink: &mut impl AudioSink) -> bool {
    if !settings.apply_input(input) {
        return false;
    }
    apply_settings(settings, sink);
    true
}

/// Sink for headless runs: logs each effect instead of playing it
#[derive(Debug)]
pub struct LogAudio {
    volume: f32,
    played: u64,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            played: 0,
        }
    }

    /// Effects requested so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play_one_shot(&mut self, effect: SoundEffect) {
        self.played += 1;
        if self.volume > 0.0 {
            log::trace!("sfx {:?} at {:.2}", effect, self.volume);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        effects: Vec<SoundEffect>,
        volume: Option<f32>,
    }

    impl AudioSink for Recorder {
        fn play_one_shot(&mut self, effect: SoundEffect) {
            self.effects.push(effect);
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = Some(volume);
        }
    }

    #[test]
    fn test_dispatch_maps_events_in_order() {
        let events = [
            GameEvent::LevelStarted(1),
            GameEvent::Fired(Side::Player),
            GameEvent::Fired(Side::Enemy),
            GameEvent::Exploded(ExplosionSize::Small),
            GameEvent::Exploded(ExplosionSize::Boss),
            GameEvent::Paused,
        ];
        let mut sink = Recorder::default();
        assert_eq!(dispatch(&events, &mut sink), 4);
        assert_eq!(
            sink.effects,
            vec![
                SoundEffect::PlayerLaser,
                SoundEffect::EnemyLaser,
                SoundEffect::LaserHit,
                SoundEffect::Explode,
            ]
        );
    }

    #[test]
    fn test_silent_events() {
        for event in [
            GameEvent::LifeLost,
            GameEvent::BossIncoming,
            GameEvent::GameOver { won: true },
            GameEvent::ReturnedToMenu,
        ] {
            assert_eq!(SoundEffect::for_event(&event), None);
        }
    }

    #[test]
    fn test_muted_settings_silence_sink() {
        let mut settings = Settings::default();
        settings.toggle_mute();
        let mut sink = Recorder::default();
        apply_settings(&settings, &mut sink);
        assert_eq!(sink.volume, Some(0.0));
    }

    #[test]
    fn test_host_keys_reach_sink() {
        let mut settings = Settings::default();
        let mut sink = Recorder::default();

        assert!(!apply_input(&mut settings, &TickInput::default(), &mut sink));
        assert_eq!(sink.volume, None);

        let quieter = TickInput {
            volume_down: true,
            ..Default::default()
        };
        assert!(apply_input(&mut settings, &quieter, &mut sink));
        assert_eq!(sink.volume, Some(0.95));

        let mute = TickInput {
            mute: true,
            ..Default::default()
        };
        assert!(apply_input(&mut settings, &mute, &mut sink));
        assert!(settings.muted);
        assert_eq!(sink.volume, Some(0.0));
    }

    #[test]
    fn test_log_audio_counts() {
        let mut sink = LogAudio::new();
        dispatch(&[GameEvent::Exploded(ExplosionSize::Normal)], &mut sink);
        assert_eq!(sink.played(), 1);
    }
}
