//! Status Sources
//!
//! Background tasks that own a feed connection and push [`SourceMessage`]s
//! to the surface over a bounded mpsc channel. Two sources exist:
//!
//! - [`broker`]: the real MQTT feed
//! - [`simulated`]: a random-reading generator for demos and tests
//!
//! A source is spawned once, runs for the life of the process, and is
//! abandoned (not joined) on shutdown. The [`SourceHandle`] carries an
//! explicit shutdown signal so a surface can stop the task cleanly even
//! though v1 only fires it on exit.
//!
//! Nothing may propagate out of a source task: connectivity errors are
//! retried with backoff, malformed messages are logged and dropped.

pub mod broker;
pub mod simulated;

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::messages::SourceMessage;

/// Capacity of the source → surface channel.
///
/// Backpressure past this point is fine: the surface drains the channel
/// every frame, and only the most recent payload needs to win.
pub(crate) const CHANNEL_CAPACITY: usize = 100;

/// Owned handle to a running status source task.
pub struct SourceHandle {
    task: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl SourceHandle {
    pub(crate) fn new(task: JoinHandle<()>, shutdown: watch::Sender<bool>) -> Self {
        Self { task, shutdown }
    }

    /// Signal the source to stop.
    ///
    /// Fire-and-forget: the task notices the signal at its next suspension
    /// point and exits. Callers do not wait for it.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Whether the source task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Reconnect backoff policy for the broker feed.
#[derive(Clone, Debug)]
pub struct ReconnectPolicy {
    /// Initial backoff delay
    pub initial_backoff_ms: u64,
    /// Maximum backoff delay
    pub max_backoff_ms: u64,
    /// Backoff multiplier
    pub backoff_multiplier: f32,
    /// Add jitter to backoff
    pub use_jitter: bool,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            initial_backoff_ms: 500,
            max_backoff_ms: 30_000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl ReconnectPolicy {
    /// Calculate backoff duration for attempt N (0-indexed)
    #[must_use]
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let base =
            self.initial_backoff_ms as f64 * f64::from(self.backoff_multiplier.powi(attempt as i32));
        let capped = base.min(self.max_backoff_ms as f64);

        let duration_ms = if self.use_jitter {
            // Add up to 25% jitter
            let jitter = rand::random::<f64>() * 0.25;
            (capped * (1.0 + jitter)) as u64
        } else {
            capped as u64
        };

        Duration::from_millis(duration_ms)
    }
}

/// Convenience alias for what a spawn returns: the task handle plus the
/// surface's end of the message channel.
pub type SpawnedSource = (SourceHandle, tokio::sync::mpsc::Receiver<SourceMessage>);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backoff_growth_and_cap() {
        let policy = ReconnectPolicy {
            initial_backoff_ms: 100,
            max_backoff_ms: 1000,
            backoff_multiplier: 2.0,
            use_jitter: false,
        };

        assert_eq!(policy.backoff_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for_attempt(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_for_attempt(3), Duration::from_millis(800));
        assert_eq!(policy.backoff_for_attempt(4), Duration::from_millis(1000)); // Capped
        assert_eq!(policy.backoff_for_attempt(10), Duration::from_millis(1000));
    }

    #[test]
    fn test_backoff_jitter_bounds() {
        let policy = ReconnectPolicy {
            initial_backoff_ms: 1000,
            max_backoff_ms: 1000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        };

        for _ in 0..50 {
            let delay = policy.backoff_for_attempt(0);
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay <= Duration::from_millis(1250));
        }
    }
}
