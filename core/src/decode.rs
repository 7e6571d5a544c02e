//! Payload Decoding
//!
//! Turns raw broker messages into [`UpdatePayload`]s. The decoder is a
//! trait so the message-to-payload transformation can be completed or
//! swapped in tests without touching connection management.
//!
//! Malformed messages yield a [`DecodeError`]; the feed task logs and
//! drops them, they are never allowed to crash the source.

use serde::Deserialize;
use thiserror::Error;

use crate::config::{FIELD_AT, FIELD_BAYS, FIELD_TEMPERATURE};
use crate::payload::{self, UpdatePayload};

/// Errors from decoding a feed message.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not a well-formed carpark reading.
    #[error("malformed feed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decodes one raw broker message into a complete update payload.
pub trait PayloadDecoder: Send + Sync {
    /// Decode the raw bytes of a single feed message.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the message is malformed; callers drop
    /// and log the message.
    fn decode(&self, raw: &[u8]) -> Result<UpdatePayload, DecodeError>;
}

/// Wire shape of a carpark reading as published on the feed topic.
///
/// `at` is optional; when absent the receive time is used.
#[derive(Debug, Deserialize)]
struct WireReading {
    available_bays: u32,
    temperature: f64,
    #[serde(default)]
    at: Option<String>,
}

/// Decoder for the JSON readings on the carpark topic.
///
/// Produces display-ready strings keyed by exactly the panel's field
/// names: a zero-padded bay count, a temperature with unit suffix, and an
/// `HH:MM:SS` clock string.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl PayloadDecoder for JsonDecoder {
    fn decode(&self, raw: &[u8]) -> Result<UpdatePayload, DecodeError> {
        let reading: WireReading = serde_json::from_slice(raw)?;
        let at = reading
            .at
            .unwrap_or_else(|| payload::format_clock(chrono::Local::now()));

        let mut update = UpdatePayload::new();
        update.set(FIELD_BAYS, payload::format_bays(reading.available_bays));
        update.set(
            FIELD_TEMPERATURE,
            payload::format_temperature(reading.temperature),
        );
        update.set(FIELD_AT, at);
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_full_reading() {
        let raw = br#"{"available_bays": 42, "temperature": 21.4, "at": "14:03:10"}"#;
        let update = JsonDecoder.decode(raw).unwrap();

        assert_eq!(update.get(FIELD_BAYS), Some("042"));
        assert_eq!(update.get(FIELD_TEMPERATURE), Some("21\u{2103}"));
        assert_eq!(update.get(FIELD_AT), Some("14:03:10"));
        assert_eq!(update.len(), 3);
    }

    #[test]
    fn test_decode_defaults_missing_timestamp() {
        let raw = br#"{"available_bays": 7, "temperature": 3.0}"#;
        let update = JsonDecoder.decode(raw).unwrap();

        assert_eq!(update.get(FIELD_BAYS), Some("007"));
        assert_eq!(update.get(FIELD_TEMPERATURE), Some("03\u{2103}"));
        // Receive time: HH:MM:SS shape, exact value depends on the clock.
        let at = update.get(FIELD_AT).unwrap();
        assert_eq!(at.len(), 8);
        assert_eq!(&at[2..3], ":");
        assert_eq!(&at[5..6], ":");
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = JsonDecoder.decode(b"not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_missing_keys() {
        let err = JsonDecoder.decode(br#"{"temperature": 21.0}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let raw = br#"{"available_bays": "lots", "temperature": 21.0}"#;
        let err = JsonDecoder.decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }
}
