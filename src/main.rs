//! Space Impact headless runner
//!
//! Plays one seeded session with the scripted autopilot, feeds its events to a
//! logging audio sink, and records the outcome in the score file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use space_impact::audio::{self, LogAudio};
use space_impact::autopilot::Autopilot;
use space_impact::persistence::LedgerStore;
use space_impact::renderer::DrawList;
use space_impact::sim::{ControlMode, GameState, tick};
use space_impact::{ScoreLedger, Settings};

#[derive(Parser, Debug)]
#[command(name = "space-impact")]
#[command(about = "Run a deterministic Space Impact session without a window")]
struct Cli {
    /// RNG seed for the session
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Hard cap on simulated ticks (60 per second)
    #[arg(long, default_value_t = 60 * 60 * 15)]
    ticks: u64,
    /// Steering scheme; defaults to the one in the settings file
    #[arg(long, value_enum)]
    control: Option<CliControl>,
    /// Leave the run after this many ticks
    #[arg(long)]
    quit_after: Option<u64>,
    /// Score ledger file
    #[arg(long, default_value = "scores.json")]
    scores: PathBuf,
    /// Settings file
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliControl {
    Pointer,
    Keyboard,
}

impl From<CliControl> for ControlMode {
    fn from(value: CliControl) -> Self {
        match value {
            CliControl::Pointer => ControlMode::Pointer,
            CliControl::Keyboard => ControlMode::Keyboard,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.ticks == 0 {
        bail!("--ticks must be at least 1");
    }

    let mut settings = cli
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let control = cli.control.map(ControlMode::from).unwrap_or(settings.control);

    let store = LedgerStore::new(&cli.scores);
    let mut ledger: ScoreLedger = store
        .load()
        .with_context(|| format!("loading scores from {}", store.path().display()))?;

    let mut sink = LogAudio::new();
    audio::apply_settings(&settings, &mut sink);

    let pilot = match cli.quit_after {
        Some(limit) => Autopilot::new().quit_after(limit),
        None => Autopilot::new(),
    };

    let mut state = GameState::new(cli.seed, control);
    let mut ticks = 0u64;
    let mut settings_changed = false;
    while !state.is_finished() && ticks < cli.ticks {
        let input = pilot.input(&state);
        settings_changed |= audio::apply_input(&mut settings, &input, &mut sink);
        tick(&mut state, &input, &mut ledger);
        audio::dispatch(state.events(), &mut sink);
        ticks += 1;
    }

    if let Some(path) = cli.settings.as_deref().filter(|_| settings_changed) {
        settings.save(path)?;
    }

    let hud = DrawList::build(&state).hud;
    if state.is_finished() {
        store.save(&ledger)?;
    } else {
        log::warn!("Tick cap reached before the run ended; nothing recorded");
    }

    println!("seed={}", cli.seed);
    println!("ticks={}", ticks);
    println!("outcome={:?}", state.end_reason);
    println!("level={}/{}", hud.level, hud.final_level);
    println!("score={}", hud.score);
    println!("kills={}", hud.kills);
    println!("lives={}", hud.lives);
    println!("sfx={}", sink.played());
    println!("scoreboard:");
    for (rank, record) in ledger.top_5().iter().enumerate() {
        println!(
            "{:>2}. {:>6} level {:>2} kills {:>3} {}",
            rank + 1,
            record.score,
            record.level,
            record.kills,
            if record.won { "won" } else { "lost" }
        );
    }
    Ok(())
}
