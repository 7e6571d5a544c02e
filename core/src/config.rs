//! Fixed Configuration
//!
//! The display deliberately has no configuration system: carpark name,
//! field list and broker parameters are constants. [`BrokerConfig`] exists
//! so tests can point the feed at a different broker, but its defaults are
//! the shipped values and the binary never overrides them.

use std::time::Duration;

use crate::fields::FieldSet;

/// Name of the carpark shown in the window title.
pub const CARPARK_NAME: &str = "Moondalup";

/// Field key for the free-bay count.
pub const FIELD_BAYS: &str = "Available bays";

/// Field key for the outside temperature.
pub const FIELD_TEMPERATURE: &str = "Temperature";

/// Field key for the reading's time of day.
pub const FIELD_AT: &str = "At";

/// The fixed, ordered field list for the carpark panel.
///
/// Update payloads must carry exactly these keys. Order determines the
/// row position in the panel.
pub const DISPLAY_FIELDS: [&str; 3] = [FIELD_BAYS, FIELD_TEMPERATURE, FIELD_AT];

/// Build the [`FieldSet`] for the carpark panel.
#[must_use]
pub fn display_fields() -> FieldSet {
    FieldSet::new(DISPLAY_FIELDS).expect("fixed field list is unique and non-empty")
}

/// Broker connection parameters for the carpark feed.
#[derive(Clone, Debug)]
pub struct BrokerConfig {
    /// Broker hostname
    pub host: String,
    /// Broker port
    pub port: u16,
    /// MQTT keep-alive interval
    pub keep_alive: Duration,
    /// Client identifier presented to the broker
    pub client_id: String,
    /// Topic carrying carpark readings
    pub topic: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1883,
            keep_alive: Duration::from_secs(300),
            client_id: "car_park_sensor".to_string(),
            topic: "car_park/data".to_string(),
        }
    }
}
