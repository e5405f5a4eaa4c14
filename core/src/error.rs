//! Error types for fanout-core

use thiserror::Error;

use crate::config::ConfigError;

/// Run-level errors
///
/// Per-item network failures are not represented here. They are reported as
/// [`FetchError`](crate::fetch::FetchError) inside an outcome record and never
/// abort a run.
#[derive(Error, Debug)]
pub enum FanoutError {
    /// No targets were supplied before end of input
    #[error("no input provided")]
    EmptyInput,

    /// Reading the target list failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid run configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The interrupt listener could not be installed
    #[error("signal error: {0}")]
    Signal(String),
}

/// Result type alias
pub type FanoutResult<T> = std::result::Result<T, FanoutError>;
