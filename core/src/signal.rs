//! Host interrupt listener
//!
//! Handlers are registered when the listener is installed, not when it is
//! first awaited, so a signal that arrives between install and the first
//! `recv` is still observed.

use crate::error::{FanoutError, FanoutResult};

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Registered SIGINT/SIGTERM handlers (Ctrl+C only on non-unix hosts)
#[derive(Debug)]
pub struct InterruptListener {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(not(unix))]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl InterruptListener {
    /// Register the handlers
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`FanoutError::Signal`] if a handler cannot be registered.
    pub fn install() -> FanoutResult<Self> {
        #[cfg(unix)]
        {
            let interrupt = signal(SignalKind::interrupt())
                .map_err(|e| FanoutError::Signal(format!("failed to listen for SIGINT: {e}")))?;
            let terminate = signal(SignalKind::terminate())
                .map_err(|e| FanoutError::Signal(format!("failed to listen for SIGTERM: {e}")))?;
            Ok(Self {
                interrupt,
                terminate,
            })
        }

        #[cfg(not(unix))]
        {
            let ctrl_c = tokio::signal::windows::ctrl_c()
                .map_err(|e| FanoutError::Signal(format!("failed to listen for Ctrl+C: {e}")))?;
            Ok(Self { ctrl_c })
        }
    }

    /// Resolve on the next SIGINT or SIGTERM
    pub async fn recv(&mut self) {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => tracing::info!("Received SIGINT"),
                _ = self.terminate.recv() => tracing::info!("Received SIGTERM"),
            }
        }

        #[cfg(not(unix))]
        {
            self.ctrl_c.recv().await;
            tracing::info!("Received Ctrl+C");
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;

    fn raise(signal: &str) {
        let status = Command::new("kill")
            .args([signal, &std::process::id().to_string()])
            .status()
            .expect("failed to run kill");
        assert!(status.success());
    }

    #[tokio::test]
    async fn test_sigterm_resolves_listener() {
        let mut listener = InterruptListener::install().unwrap();

        // delivered before the first recv; must not be lost
        raise("-TERM");

        tokio::time::timeout(Duration::from_secs(5), listener.recv())
            .await
            .expect("listener did not observe SIGTERM");
    }

    #[tokio::test]
    async fn test_sigint_resolves_listener() {
        let mut listener = InterruptListener::install().unwrap();

        raise("-INT");

        tokio::time::timeout(Duration::from_secs(5), listener.recv())
            .await
            .expect("listener did not observe SIGINT");
    }
}
