//! Integration tests for the Worker module

use super::*;
use crate::fetch::{FetchError, FetchedResponse, Fetcher, RequestExecutor};
use crate::stats::StatsTable;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock Fetcher
// ============================================================================

/// Records every target it sees; targets containing "refused" fail before
/// headers and targets containing "truncated" fail while reading the body.
struct MockFetcher {
    seen: Mutex<Vec<String>>,
    counts_seen: Mutex<Vec<usize>>,
    stats: Option<(Arc<StatsTable>, usize)>,
}

impl MockFetcher {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            counts_seen: Mutex::new(Vec::new()),
            stats: None,
        }
    }

    /// Also record `stats[id]` at the start of every call
    fn watching(stats: Arc<StatsTable>, id: usize) -> Self {
        Self {
            stats: Some((stats, id)),
            ..Self::new()
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, target: &str) -> Result<FetchedResponse, FetchError> {
        if let Some((stats, id)) = &self.stats {
            self.counts_seen
                .lock()
                .unwrap()
                .push(stats.get(*id).unwrap_or_default());
        }
        self.seen.lock().unwrap().push(target.to_string());
        tokio::task::yield_now().await;

        if target.contains("refused") {
            return Err(FetchError::Transport("connection refused".into()));
        }
        if target.contains("truncated") {
            return Err(FetchError::BodyRead("unexpected end of body".into()));
        }

        Ok(FetchedResponse {
            status: 200,
            bytes: target.len() as u64,
            latency: Duration::from_millis(1),
            total: Duration::from_millis(2),
        })
    }
}

fn chunk(targets: &[&str]) -> Vec<String> {
    targets.iter().map(|t| t.to_string()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_worker_processes_chunk_in_order() {
    let fetcher = Arc::new(MockFetcher::new());
    let stats = Arc::new(StatsTable::new(1));
    let targets = chunk(&["http://a", "http://b", "http://c"]);

    let worker = Worker::new(
        0,
        targets.clone(),
        RequestExecutor::new(fetcher.clone()),
        Arc::clone(&stats),
    );
    let tally = worker.run().await;

    assert_eq!(fetcher.seen(), targets);
    assert_eq!(tally.succeeded, 3);
    assert_eq!(tally.failed, 0);
    assert_eq!(stats.get(0), Some(3));
}

#[tokio::test]
async fn test_worker_counts_failures_as_completed() {
    let fetcher = Arc::new(MockFetcher::new());
    let stats = Arc::new(StatsTable::new(1));
    let targets = chunk(&[
        "http://refused",
        "http://ok",
        "http://truncated",
        "http://ok2",
    ]);

    let worker = Worker::new(
        0,
        targets.clone(),
        RequestExecutor::new(fetcher.clone()),
        Arc::clone(&stats),
    );
    let tally = worker.run().await;

    // failures never stop later items in the chunk
    assert_eq!(fetcher.seen(), targets);
    assert_eq!(tally.succeeded, 2);
    assert_eq!(tally.failed, 2);
    assert_eq!(stats.get(0), Some(4));
}

#[tokio::test]
async fn test_worker_counter_is_monotonic() {
    let stats = Arc::new(StatsTable::new(2));
    let fetcher = Arc::new(MockFetcher::watching(Arc::clone(&stats), 1));
    let targets = chunk(&["http://1", "http://refused", "http://3", "http://4"]);

    let worker = Worker::new(
        1,
        targets,
        RequestExecutor::new(fetcher.clone()),
        Arc::clone(&stats),
    );
    worker.run().await;

    let counts = fetcher.counts_seen.lock().unwrap().clone();
    assert_eq!(counts, vec![0, 1, 2, 3]);
    assert_eq!(stats.get(1), Some(4));
}

#[tokio::test]
async fn test_worker_only_writes_own_entry() {
    let fetcher = Arc::new(MockFetcher::new());
    let stats = Arc::new(StatsTable::new(3));

    let worker = Worker::new(
        2,
        chunk(&["http://x", "http://y"]),
        RequestExecutor::new(fetcher),
        Arc::clone(&stats),
    );
    worker.run().await;

    assert_eq!(stats.snapshot().counts(), &[0, 0, 2]);
}

#[tokio::test]
async fn test_worker_empty_chunk_finishes_immediately() {
    let fetcher = Arc::new(MockFetcher::new());
    let stats = Arc::new(StatsTable::new(1));

    let worker = Worker::new(
        0,
        Vec::new(),
        RequestExecutor::new(fetcher.clone()),
        Arc::clone(&stats),
    );
    assert!(worker.is_empty());
    let tally = worker.run().await;

    assert_eq!(tally.attempted(), 0);
    assert!(fetcher.seen().is_empty());
    assert_eq!(stats.get(0), Some(0));
}

#[test]
fn test_worker_debug_format() {
    let worker = Worker::new(
        4,
        chunk(&["http://a"]),
        RequestExecutor::new(Arc::new(MockFetcher::new())),
        Arc::new(StatsTable::new(5)),
    );

    assert_eq!(worker.id(), 4);
    assert_eq!(worker.len(), 1);
    let debug = format!("{worker:?}");
    assert!(debug.contains("Worker"));
    assert!(debug.contains("mock"));
}
