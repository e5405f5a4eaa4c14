//! Single-request execution
//!
//! A [`Fetcher`] performs exactly one request attempt for one target and
//! reports either a complete response summary or the phase it failed in.
//! [`RequestExecutor`] wraps a fetcher, times the attempt, and produces the
//! [`OutcomeRecord`] a worker logs and counts. Nothing here retries.

mod http;

pub use http::HttpFetcher;

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::partition::WorkItem;

/// Where a failed request broke down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePhase {
    /// Sending the request or waiting for the status line and headers
    Request,
    /// Consuming the response body after a successful status line
    Body,
}

impl fmt::Display for FailurePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePhase::Request => f.write_str("request"),
            FailurePhase::Body => f.write_str("body"),
        }
    }
}

/// Per-item request failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or timeout failure before headers arrived
    #[error("transport error: {0}")]
    Transport(String),

    /// The body could not be fully read
    #[error("body read error: {0}")]
    BodyRead(String),
}

impl FetchError {
    /// Phase the request failed in
    pub fn phase(&self) -> FailurePhase {
        match self {
            FetchError::Transport(_) => FailurePhase::Request,
            FetchError::BodyRead(_) => FailurePhase::Body,
        }
    }
}

/// Summary of a fully consumed response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchedResponse {
    /// HTTP status code
    pub status: u16,
    /// Body length in bytes
    pub bytes: u64,
    /// Time from request start until headers were available
    pub latency: Duration,
    /// Time from request start until the body was fully read
    pub total: Duration,
}

/// Performs one request attempt for one target
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Request `target` once and consume the whole response body
    async fn fetch(&self, target: &str) -> Result<FetchedResponse, FetchError>;
}

/// Result of executing one work item
///
/// Either carries a full [`FetchedResponse`] (status and size together) or a
/// [`FetchError`]; there is no partially successful state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRecord {
    /// Target that was requested
    pub target: WorkItem,
    /// Time to headers on success, time to failure otherwise
    pub latency: Duration,
    /// Response summary or failure
    pub result: Result<FetchedResponse, FetchError>,
}

impl OutcomeRecord {
    /// Whether the request completed with a fully read body
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Latency rounded down to whole milliseconds
    pub fn latency_ms(&self) -> u128 {
        self.latency.as_millis()
    }
}

/// Executes work items through a shared [`Fetcher`]
#[derive(Clone)]
pub struct RequestExecutor {
    fetcher: Arc<dyn Fetcher>,
}

impl RequestExecutor {
    /// Create an executor backed by `fetcher`
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Execute `target` exactly once
    pub async fn execute(&self, target: &str) -> OutcomeRecord {
        let start = Instant::now();
        let result = self.fetcher.fetch(target).await;
        let latency = match &result {
            Ok(response) => response.latency,
            Err(_) => start.elapsed(),
        };

        OutcomeRecord {
            target: target.to_string(),
            latency,
            result,
        }
    }
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("fetcher", &self.fetcher.name())
            .finish()
    }
}
