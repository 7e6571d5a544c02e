//! MQTT Broker Feed
//!
//! The real status source: holds one long-lived connection to the carpark
//! broker, subscribes to the feed topic, and decodes each published
//! reading into an [`SourceMessage::Update`].
//!
//! Failure containment, in line with the rest of the crate:
//! - connection errors emit [`FeedState::Connecting`] and retry with
//!   exponential backoff; the task never gives up,
//! - malformed readings are logged and dropped,
//! - the task exits only on the shutdown signal or when the surface drops
//!   its receiver.

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::config::BrokerConfig;
use crate::decode::PayloadDecoder;
use crate::messages::{FeedState, SourceMessage};

use super::{ReconnectPolicy, SourceHandle, SpawnedSource, CHANNEL_CAPACITY};

/// Spawn the broker feed as a background task.
///
/// Returns the task handle and the surface's end of the message channel.
/// The task starts connecting immediately.
pub fn spawn<D>(config: BrokerConfig, decoder: D, policy: ReconnectPolicy) -> SpawnedSource
where
    D: PayloadDecoder + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(run(config, decoder, policy, tx, shutdown_rx));

    (SourceHandle::new(task, shutdown_tx), rx)
}

/// The feed task body. Never returns an error; every failure is contained
/// here so nothing can take down the render loop.
async fn run<D>(
    config: BrokerConfig,
    decoder: D,
    policy: ReconnectPolicy,
    tx: mpsc::Sender<SourceMessage>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    D: PayloadDecoder,
{
    let _ = tx.send(SourceMessage::Feed(FeedState::Connecting)).await;

    let mut options = MqttOptions::new(
        config.client_id.as_str(),
        config.host.as_str(),
        config.port,
    );
    options.set_keep_alive(config.keep_alive);

    let (client, mut eventloop) = AsyncClient::new(options, 10);

    // Consecutive failed polls since the last successful connection.
    let mut attempt: u32 = 0;

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => {
                info!("broker feed shutting down");
                return;
            }

            event = eventloop.poll() => match event {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    // Subscriptions do not survive a reconnect; renew on
                    // every CONNACK.
                    if let Err(e) = client.subscribe(config.topic.as_str(), QoS::AtMostOnce).await {
                        warn!(error = %e, topic = %config.topic, "subscribe failed");
                        continue;
                    }
                    attempt = 0;
                    info!(
                        host = %config.host,
                        port = config.port,
                        topic = %config.topic,
                        "subscribed to carpark feed"
                    );
                    let _ = tx.send(SourceMessage::Feed(FeedState::Subscribed)).await;
                }

                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    match decoder.decode(&publish.payload) {
                        Ok(update) => {
                            debug!(topic = %publish.topic, "feed reading received");
                            if tx.send(SourceMessage::Update(update)).await.is_err() {
                                // Surface dropped its receiver; nothing left to feed.
                                return;
                            }
                        }
                        Err(e) => {
                            warn!(
                                error = %e,
                                topic = %publish.topic,
                                "dropping malformed feed message"
                            );
                        }
                    }
                }

                Ok(_) => {}

                Err(e) => {
                    let delay = policy.backoff_for_attempt(attempt);
                    attempt = attempt.saturating_add(1);
                    warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "broker connection lost; retrying"
                    );
                    let _ = tx.send(SourceMessage::Feed(FeedState::Connecting)).await;

                    tokio::select! {
                        _ = shutdown_rx.changed() => {
                            info!("broker feed shutting down");
                            return;
                        }
                        () = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }
    }
}
