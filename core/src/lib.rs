//! fanout-core: fan a batch of requests out across a fixed worker pool
//!
//! This crate provides everything behind the `fanout-bench` binary:
//!
//! - Partitioning targets into contiguous, order-preserving chunks
//! - Executing one request per target and capturing status, size, and latency
//! - Workers that walk their chunk serially and count every attempt
//! - A lock-free per-worker stats table and the report rendered from it
//! - A coordinator that races the completion barrier against an interrupt

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod orchestrator;
pub mod partition;
pub mod signal;
pub mod stats;
pub mod worker;

pub use config::{ConfigError, RunConfig};
pub use error::*;
pub use fetch::{
    FailurePhase, FetchError, FetchedResponse, Fetcher, HttpFetcher, OutcomeRecord,
    RequestExecutor,
};
pub use input::read_targets;
pub use orchestrator::{Coordinator, RunOutcome, RunState, Session};
pub use partition::{chunk_bounds, ChunkAssignment, WorkItem, WorkerId};
pub use signal::InterruptListener;
pub use stats::{Report, StatsSnapshot, StatsTable};
pub use worker::{Worker, WorkerStats};
