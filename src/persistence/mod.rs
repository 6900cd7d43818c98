//! Score ledger storage
//!
//! The simulation only appends to an in-memory `ScoreLedger`. This module is the
//! optional store a host can use to keep it across restarts:
//! - Versioned JSON envelope
//! - Write to a temp file, then rename over the old one

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::highscores::ScoreLedger;

/// Current on-disk format
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    ledger: ScoreLedger,
}

/// JSON file holding a score ledger
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger; a missing file is an empty ledger
    pub fn load(&self) -> Result<ScoreLedger> {
        if !self.path.exists() {
            log::info!("No score file at {}, starting fresh", self.path.display());
            return Ok(ScoreLedger::new());
        }

        let raw = fs::read(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let envelope: Envelope = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        if envelope.version != FORMAT_VERSION {
            bail!(
                "unsupported score file version {} (expected {})",
                envelope.version,
                FORMAT_VERSION
            );
        }

        log::info!("Loaded {} score records", envelope.ledger.len());
        Ok(envelope.ledger)
    }

    pub fn save(&self, ledger: &ScoreLedger) -> Result<()> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            ledger: ledger.clone(),
        };
        let json = serde_json::to_vec_pretty(&envelope)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        log::info!("Scores saved ({} records)", ledger.len());
        Ok(())
    }
}
