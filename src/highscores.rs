//! Score ledger
//!
//! Append-only record of every finished run. The scoreboard shows the top 5 by
//! score; ties keep the order in which runs finished.

use serde::{Deserialize, Serialize};

/// Number of runs shown on the scoreboard
pub const SCOREBOARD_SIZE: usize = 5;

/// Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Run ended in victory
    pub won: bool,
    /// Level reached
    pub level: u32,
    pub score: u64,
    pub kills: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    records: Vec<ScoreRecord>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    /// All records in the order they were appended
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Highest `n` scores, descending; equal scores stay in insertion order
    pub fn top_n(&self, n: usize) -> Vec<ScoreRecord> {
        let mut sorted = self.records.clone();
        // Stable sort keeps insertion order among ties
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    pub fn top_5(&self) -> Vec<ScoreRecord> {
        self.top_n(SCOREBOARD_SIZE)
    }

    /// Best score so far (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.records.iter().map(|r| r.score).max()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
