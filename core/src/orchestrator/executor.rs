//! Coordinator execution logic

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;

use crate::config::RunConfig;
use crate::error::FanoutResult;
use crate::fetch::{Fetcher, RequestExecutor};
use crate::partition::{ChunkAssignment, WorkItem, WorkerId};
use crate::worker::{Worker, WorkerStats};

use super::session::{RunOutcome, Session};
use super::state::RunState;

/// Coordinator manages the run lifecycle
///
/// Responsible for partitioning, spawning workers, waiting on them, and
/// producing the final or interrupted outcome.
pub struct Coordinator {
    /// Run configuration
    config: RunConfig,

    /// Request executor (shared across workers)
    executor: RequestExecutor,
}

impl Coordinator {
    /// Create a new coordinator
    ///
    /// # Errors
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: RunConfig, fetcher: Arc<dyn Fetcher>) -> FanoutResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            executor: RequestExecutor::new(fetcher),
        })
    }

    /// Get the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run `items` to completion or until `interrupt` resolves
    ///
    /// Pass [`InterruptListener::recv`](crate::signal::InterruptListener::recv)
    /// for SIGINT/SIGTERM handling; install the listener before reading
    /// input so an early signal is not lost.
    ///
    /// On interrupt the stats table is snapshotted immediately. Workers are
    /// neither awaited nor cancelled; their tasks are detached and keep
    /// running for as long as the runtime does.
    ///
    /// # Errors
    /// Returns [`FanoutError::EmptyInput`](crate::FanoutError::EmptyInput)
    /// before any dispatch if `items` is empty.
    pub async fn run_until<F>(&self, items: Vec<WorkItem>, interrupt: F) -> FanoutResult<RunOutcome>
    where
        F: Future<Output = ()>,
    {
        let start = Instant::now();
        let mut state = RunState::Init;

        let assignment = ChunkAssignment::new(items, self.config.workers)?;
        transition(&mut state, RunState::Partitioned);

        let session = Session::new(&assignment);
        tracing::info!(
            workers = assignment.workers(),
            requested_workers = self.config.workers,
            items = assignment.total(),
            "Starting run"
        );

        let handles = self.dispatch(assignment, &session);
        transition(&mut state, RunState::Dispatched);

        let barrier = wait_all(handles);
        tokio::pin!(barrier);
        tokio::pin!(interrupt);
        transition(&mut state, RunState::Running);

        let terminal = tokio::select! {
            _ = &mut barrier => RunState::Completed,
            _ = &mut interrupt => RunState::Interrupted,
        };
        transition(&mut state, terminal);

        let outcome = session.finish(state);
        tracing::info!(
            state = %outcome.state,
            completed = outcome.snapshot.total(),
            elapsed_secs = start.elapsed().as_secs_f64(),
            "Run finished"
        );

        Ok(outcome)
    }

    /// Spawn one worker task per non-empty chunk
    fn dispatch(
        &self,
        assignment: ChunkAssignment,
        session: &Session,
    ) -> Vec<(WorkerId, JoinHandle<WorkerStats>)> {
        let mut handles = Vec::with_capacity(assignment.workers());
        for (worker_id, chunk) in assignment.into_chunks() {
            if chunk.is_empty() {
                continue;
            }
            let worker = Worker::new(worker_id, chunk, self.executor.clone(), session.stats());
            handles.push((worker_id, tokio::spawn(worker.run())));
        }
        handles
    }
}

/// Completion barrier: resolves once every worker task has finished
async fn wait_all(handles: Vec<(WorkerId, JoinHandle<WorkerStats>)>) {
    for (worker_id, handle) in handles {
        match handle.await {
            Ok(stats) => {
                tracing::debug!(
                    worker_id,
                    succeeded = stats.succeeded,
                    failed = stats.failed,
                    bytes = stats.bytes,
                    "Worker completed"
                );
            }
            Err(e) => {
                tracing::error!(worker_id, error = %e, "Worker task panicked");
            }
        }
    }
}

fn transition(state: &mut RunState, next: RunState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal run transition {state} -> {next}"
    );
    tracing::debug!(from = %state, to = %next, "Run state");
    *state = next;
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("config", &self.config)
            .field("executor", &self.executor)
            .finish()
    }
}
