//! Feed Messages
//!
//! Messages sent from a status source to the UI surface. This is the whole
//! protocol between the background feed task and the render loop: a
//! one-directional push over a bounded mpsc channel. The surface has no
//! business logic; it renders what the feed tells it to.

use serde::{Deserialize, Serialize};

use crate::payload::UpdatePayload;

/// Messages from a status source to the surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMessage {
    /// A fully-formed update ready to apply to the panel.
    Update(UpdatePayload),
    /// The feed's connection state changed.
    Feed(FeedState),
}

/// Connection state of the carpark feed.
///
/// `Disconnected → Connecting → Subscribed`, with `Subscribed → Connecting`
/// on connection loss. There is no terminal state; the feed runs until
/// process exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedState {
    /// No connection attempt has been made yet.
    Disconnected,
    /// Connecting (or reconnecting after a dropped connection).
    Connecting,
    /// Connected and subscribed to the carpark topic.
    Subscribed,
}

impl FeedState {
    /// Human-readable label for status displays.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disconnected => "offline",
            Self::Connecting => "connecting",
            Self::Subscribed => "live",
        }
    }
}

impl std::fmt::Display for FeedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feed_state_labels() {
        assert_eq!(FeedState::Disconnected.label(), "offline");
        assert_eq!(FeedState::Connecting.label(), "connecting");
        assert_eq!(FeedState::Subscribed.label(), "live");
    }

    #[test]
    fn test_feed_state_display() {
        assert_eq!(FeedState::Subscribed.to_string(), "live");
    }

    #[test]
    fn test_source_message_round_trip() {
        let payload: UpdatePayload = [("A", "1")].into_iter().collect();
        let msg = SourceMessage::Update(payload.clone());
        let json = serde_json::to_string(&msg).unwrap();
        let back: SourceMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SourceMessage::Update(payload));
    }
}
