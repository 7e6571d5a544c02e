//! Update Payloads
//!
//! An [`UpdatePayload`] is a complete field-name → display-string mapping,
//! built per feed notification and handed to the surface as an immutable
//! value. It is the only data that crosses the thread boundary.
//!
//! The formatting helpers produce the exact display shapes the panel
//! expects (zero-padded bay counts, a temperature with unit suffix, a
//! time-of-day clock) and are shared by the broker decoder and the
//! simulated feed.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A complete mapping of field name to new display value.
///
/// Key iteration order is irrelevant; only coverage of the displayed
/// fields matters. Payloads are ephemeral: constructed per notification,
/// applied once, not retained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    values: HashMap<String, String>,
}

impl UpdatePayload {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display value for a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Look up the value for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the payload carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<F, V> FromIterator<(F, V)> for UpdatePayload
where
    F: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(f, v)| (f.into(), v.into()))
                .collect(),
        }
    }
}

/// Format a free-bay count, zero-padded to three digits.
#[must_use]
pub fn format_bays(count: u32) -> String {
    format!("{count:03}")
}

/// Format a temperature in whole degrees Celsius with unit suffix.
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:02.0}\u{2103}")
}

/// Format a time of day as `HH:MM:SS`.
#[must_use]
pub fn format_clock(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}
