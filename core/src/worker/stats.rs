//! Worker-local outcome tally

use std::time::{Duration, Instant};

/// Success/failure split kept by each worker for its own logs
///
/// The shared stats table counts every attempted item; this keeps the finer
/// breakdown that the report deliberately does not show.
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Requests whose body was fully read
    pub succeeded: usize,

    /// Requests that failed in either phase
    pub failed: usize,

    /// Total body bytes received
    pub bytes: u64,

    /// Worker start time
    pub started_at: Option<Instant>,

    /// Worker end time
    pub ended_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop tracking (records end time)
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Items attempted so far
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Record a successful request
    pub fn record_success(&mut self, bytes: u64) {
        self.succeeded += 1;
        self.bytes += bytes;
    }

    /// Record a failed request
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_stats_defaults() {
        let stats = WorkerStats::default();
        assert_eq!(stats.attempted(), 0);
        assert_eq!(stats.bytes, 0);
        assert!(stats.elapsed().is_none());
    }

    #[test]
    fn test_worker_stats_records() {
        let mut stats = WorkerStats::new();
        stats.record_success(100);
        stats.record_failure();
        stats.record_success(20);

        assert_eq!(stats.succeeded, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.attempted(), 3);
        assert_eq!(stats.bytes, 120);
    }

    #[test]
    fn test_worker_stats_start_stop() {
        let mut stats = WorkerStats::new();
        stats.start();
        std::thread::sleep(Duration::from_millis(10));
        stats.stop();

        assert!(stats.elapsed().unwrap() >= Duration::from_millis(10));
    }
}
