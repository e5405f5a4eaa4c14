//! Worker execution loop

use std::sync::Arc;

use crate::fetch::{OutcomeRecord, RequestExecutor};
use crate::partition::{WorkItem, WorkerId};
use crate::stats::StatsTable;

use super::stats::WorkerStats;

/// Serially executes one chunk of targets
pub struct Worker {
    /// Worker identifier, also its key in the stats table
    id: WorkerId,

    /// Targets in original order
    chunk: Vec<WorkItem>,

    /// Request executor (shared across workers)
    executor: RequestExecutor,

    /// Shared stats table; this worker only writes its own entry
    stats: Arc<StatsTable>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: WorkerId,
        chunk: Vec<WorkItem>,
        executor: RequestExecutor,
        stats: Arc<StatsTable>,
    ) -> Self {
        Self {
            id,
            chunk,
            executor,
            stats,
        }
    }

    /// Get the worker ID
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Number of targets assigned to this worker
    pub fn len(&self) -> usize {
        self.chunk.len()
    }

    /// Whether this worker has nothing to do
    pub fn is_empty(&self) -> bool {
        self.chunk.is_empty()
    }

    /// Run the chunk to completion
    ///
    /// Every item is attempted once. Each outcome, success or failure, bumps
    /// this worker's counter by one before it is logged.
    pub async fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::new();
        stats.start();

        tracing::debug!(worker_id = self.id, items = self.chunk.len(), "Worker started");

        for target in &self.chunk {
            let outcome = self.executor.execute(target).await;
            self.stats.increment(self.id);
            self.report(&outcome, &mut stats);
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            succeeded = stats.succeeded,
            failed = stats.failed,
            elapsed_ms = ?stats.elapsed().map(|d| d.as_millis()),
            "Worker finished"
        );

        stats
    }

    fn report(&self, outcome: &OutcomeRecord, stats: &mut WorkerStats) {
        match &outcome.result {
            Ok(response) => {
                stats.record_success(response.bytes);
                tracing::info!(
                    "{};{};{};{}ms",
                    outcome.target,
                    response.status,
                    response.bytes,
                    outcome.latency_ms()
                );
            }
            Err(e) => {
                stats.record_failure();
                tracing::error!(
                    url = %outcome.target,
                    worker_id = self.id,
                    phase = %e.phase(),
                    error = %e,
                    "request failed"
                );
            }
        }
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("items", &self.chunk.len())
            .field("executor", &self.executor)
            .finish()
    }
}
