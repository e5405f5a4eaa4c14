//! Run configuration types

/// Run configuration
///
/// Holds the desired worker count. The partitioner may clamp it down to the
/// number of targets, so the actual pool size is only known once a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Desired number of concurrent workers
    pub workers: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

impl RunConfig {
    /// Create a new config with the given worker count
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// One worker per available parallel execution unit on this host
    pub fn from_host() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { workers }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid worker count
    #[error("Invalid worker count: {0}")]
    InvalidWorkers(String),
}
