//! Worker module for executing a chunk of targets
//!
//! A Worker owns one contiguous chunk of the input and walks it strictly in
//! order: **execute -> count -> log -> next**. There is no parallelism inside
//! a worker, so its counter in the shared [`StatsTable`](crate::stats::StatsTable)
//! has a single writer. Returning from [`Worker::run`] is the worker's one
//! completion signal to the coordinator.
//!
//! # Example
//!
//! ```ignore
//! let worker = Worker::new(0, chunk, executor, Arc::clone(&stats));
//! let tally = tokio::spawn(worker.run()).await?;
//! println!("succeeded: {}", tally.succeeded);
//! ```

mod executor;
mod stats;

pub use executor::Worker;
pub use stats::WorkerStats;

#[cfg(test)]
mod tests;
