// src/models/stats.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counts reported by a single stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    /// Stage name as shown in logs
    pub stage: &'static str,
    /// Entries read from the previous stage (pages for the harvester)
    pub input: usize,
    /// Entries written to this stage's file
    pub output: usize,
    /// Entries skipped as "contributes nothing"
    pub dropped: usize,
}

impl StageStats {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            ..Self::default()
        }
    }
}

/// Timing and per-stage counts of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub stages: Vec<StageStats>,
}

impl RunStats {
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            start_time: now,
            end_time: now,
            stages: Vec::new(),
        }
    }

    pub fn record(&mut self, stats: StageStats) {
        self.stages.push(stats);
    }

    pub fn finish(&mut self) {
        self.end_time = Utc::now();
    }

    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}
