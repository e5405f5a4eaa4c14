//! Coordinator for the run lifecycle
//!
//! The Coordinator drives one complete run:
//! - Partitioning the targets into one chunk per worker
//! - Spawning a tokio task per non-empty chunk
//! - Waiting on all workers as a completion barrier
//! - Racing that barrier against an interrupt, which wins with whatever
//!   counts the stats table holds at that instant
//!
//! # Example
//!
//! ```ignore
//! use fanout_core::{Coordinator, HttpFetcher, InterruptListener, RunConfig};
//!
//! let mut listener = InterruptListener::install()?;
//! let coordinator = Coordinator::new(RunConfig::from_host(), Arc::new(HttpFetcher::new()))?;
//! let outcome = coordinator.run_until(targets, listener.recv()).await?;
//! print!("{}", outcome.report());
//! ```

mod executor;
mod session;
mod state;

pub use executor::Coordinator;
pub use session::{RunOutcome, Session};
pub use state::RunState;
