//! Per-worker completion counters and the report rendered from them
//!
//! Each worker owns exactly one counter and is its only writer. Reporting may
//! read the whole table at any moment from another task, so every counter is
//! an independent atomic: a reader never sees a torn value, but it may see
//! different workers at slightly different points in time.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::partition::WorkerId;

/// Table of worker id to completed-request count
#[derive(Debug)]
pub struct StatsTable {
    counters: Vec<AtomicUsize>,
}

impl StatsTable {
    /// Create a table with one zeroed counter per worker
    pub fn new(workers: usize) -> Self {
        Self {
            counters: (0..workers).map(|_| AtomicUsize::new(0)).collect(),
        }
    }

    /// Number of workers tracked
    pub fn workers(&self) -> usize {
        self.counters.len()
    }

    /// Add one completed request to `id`'s counter
    ///
    /// # Panics
    /// Panics if `id` is outside the table.
    pub fn increment(&self, id: WorkerId) {
        self.counters[id].fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for `id`
    pub fn get(&self, id: WorkerId) -> Option<usize> {
        self.counters.get(id).map(|c| c.load(Ordering::Relaxed))
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            counts: self
                .counters
                .iter()
                .map(|c| c.load(Ordering::Relaxed))
                .collect(),
        }
    }
}

/// Copy of the stats table taken at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    counts: Vec<usize>,
}

impl StatsSnapshot {
    /// Build a snapshot from raw counts, indexed by worker id
    pub fn from_counts(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// Counts indexed by worker id
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Sum over all workers
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Render the per-worker report
    pub fn render(&self) -> Report {
        let lines = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(id, &count)| format!("Thread '{id}' performed {count} requests"))
            .collect::<Vec<_>>();

        if lines.is_empty() {
            Report {
                lines: vec!["No request completed".to_string()],
            }
        } else {
            Report { lines }
        }
    }
}

/// Rendered report, one line per worker that completed at least one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Report lines in worker order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
