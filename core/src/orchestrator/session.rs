//! Per-run state shared between the coordinator and its workers

use std::sync::Arc;

use crate::partition::ChunkAssignment;
use crate::stats::{Report, StatsSnapshot, StatsTable};

use super::state::RunState;

/// Explicit run object owned by the coordinator
///
/// Holds the stats table handed to every worker and the chunk sizes the
/// counters are bounded by.
#[derive(Debug)]
pub struct Session {
    stats: Arc<StatsTable>,
    chunk_lens: Vec<usize>,
}

impl Session {
    /// Create a session sized for `assignment`
    pub fn new(assignment: &ChunkAssignment) -> Self {
        Self {
            stats: Arc::new(StatsTable::new(assignment.workers())),
            chunk_lens: assignment.chunk_lens(),
        }
    }

    /// Shared handle to the stats table
    pub fn stats(&self) -> Arc<StatsTable> {
        Arc::clone(&self.stats)
    }

    /// Snapshot the table and close the session in `state`
    pub fn finish(&self, state: RunState) -> RunOutcome {
        debug_assert!(state.is_terminal(), "session finished in {state}");
        RunOutcome {
            state,
            snapshot: self.stats.snapshot(),
            chunk_lens: self.chunk_lens.clone(),
        }
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// `Completed` or `Interrupted`
    pub state: RunState,
    /// Counts at the moment the run ended
    pub snapshot: StatsSnapshot,
    /// Chunk length per worker
    pub chunk_lens: Vec<usize>,
}

impl RunOutcome {
    /// Outcome of a run interrupted while its targets were still being read
    ///
    /// Nothing was partitioned or dispatched, so the report is empty.
    pub fn interrupted_before_dispatch() -> Self {
        Self {
            state: RunState::Interrupted,
            snapshot: StatsSnapshot::default(),
            chunk_lens: Vec::new(),
        }
    }

    /// Whether an interrupt ended the run
    pub fn is_interrupted(&self) -> bool {
        self.state == RunState::Interrupted
    }

    /// Render the report from the final snapshot
    pub fn report(&self) -> Report {
        self.snapshot.render()
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}
