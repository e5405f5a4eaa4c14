//! HTTP GET fetcher backed by reqwest

use std::error::Error as StdError;
use std::time::Instant;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

use super::{FetchError, FetchedResponse, Fetcher};

/// Issues one plain GET per target with reqwest's default client settings
///
/// No retries, no redirect override, no timeout beyond the client default.
/// The body is streamed and counted rather than buffered.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default reqwest client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, target: &str) -> Result<FetchedResponse, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchError::Transport(error_chain(&e)))?;
        let latency = start.elapsed();
        let status = response.status().as_u16();

        let mut bytes = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| FetchError::BodyRead(error_chain(&e)))?;
            bytes += chunk.len() as u64;
        }
        let total = start.elapsed();

        tracing::trace!(
            url = target,
            status,
            bytes,
            total_ms = total.as_millis() as u64,
            "Body consumed"
        );

        Ok(FetchedResponse {
            status,
            bytes,
            latency,
            total,
        })
    }
}

/// reqwest's top-level message omits the cause, so append the source chain
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
