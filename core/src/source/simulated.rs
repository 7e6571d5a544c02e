//! Simulated Feed
//!
//! A status source that invents readings instead of subscribing to the
//! broker: random bay counts and temperatures, stamped with the local
//! clock, pushed on a randomized interval. Used for demos and integration
//! tests; the shipped binary always uses the broker feed.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::config::{FIELD_AT, FIELD_BAYS, FIELD_TEMPERATURE};
use crate::messages::{FeedState, SourceMessage};
use crate::payload::{self, UpdatePayload};

use super::{SourceHandle, SpawnedSource, CHANNEL_CAPACITY};

/// Interval bounds for the simulated feed.
#[derive(Clone, Debug)]
pub struct SimulatedConfig {
    /// Shortest wait between readings
    pub min_interval: Duration,
    /// Longest wait between readings
    pub max_interval: Duration,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(10),
        }
    }
}

/// Spawn the simulated feed as a background task.
pub fn spawn(config: SimulatedConfig) -> SpawnedSource {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(run(config, tx, shutdown_rx));

    (SourceHandle::new(task, shutdown_tx), rx)
}

async fn run(
    config: SimulatedConfig,
    tx: mpsc::Sender<SourceMessage>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    // The simulated feed is always "connected".
    let _ = tx.send(SourceMessage::Feed(FeedState::Subscribed)).await;

    loop {
        // Pick the wait in a block so the RNG is not held across an await.
        let wait = {
            let mut rng = rand::thread_rng();
            rng.gen_range(config.min_interval..=config.max_interval)
        };

        tokio::select! {
            _ = shutdown_rx.changed() => {
                info!("simulated feed shutting down");
                return;
            }
            () = tokio::time::sleep(wait) => {}
        }

        if tx.send(SourceMessage::Update(random_reading())).await.is_err() {
            return;
        }
    }
}

/// Invent one complete carpark reading.
fn random_reading() -> UpdatePayload {
    let mut rng = rand::thread_rng();

    let mut update = UpdatePayload::new();
    update.set(FIELD_BAYS, payload::format_bays(rng.gen_range(0..=150)));
    update.set(
        FIELD_TEMPERATURE,
        payload::format_temperature(f64::from(rng.gen_range(0_u32..=45))),
    );
    update.set(FIELD_AT, payload::format_clock(chrono::Local::now()));
    update
}
