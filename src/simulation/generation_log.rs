//! Bounded history of finished generations.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Summary of one finished generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation number, starting at 0.
    pub generation: u32,
    /// Ticks the generation ran for.
    pub ticks: u64,
    /// Progress of this generation's furthest agent.
    pub leader_progress: f64,
    /// Progress of the seed carried into the next generation.
    pub best_progress: f64,
    /// Whether this generation replaced the seed.
    pub improved: bool,
}

/// Recent generation summaries, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationLog {
    records: VecDeque<GenerationRecord>,
    max_records: usize,
}

impl Default for GenerationLog {
    fn default() -> Self {
        Self::new(100)
    }
}

impl GenerationLog {
    /// Creates a log that keeps at most `max_records` entries.
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records),
            max_records,
        }
    }

    /// Adds a record, dropping the oldest if the log is full.
    pub fn log(&mut self, record: GenerationRecord) {
        self.records.push_front(record);
        while self.records.len() > self.max_records {
            self.records.pop_back();
        }
    }

    /// All records, newest first.
    pub fn records(&self) -> &VecDeque<GenerationRecord> {
        &self.records
    }

    /// Most recent record.
    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.front()
    }

    /// Clears all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
