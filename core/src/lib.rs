//! Carpark Core - Headless status feed for the Moondalup carpark display
//!
//! This crate provides the display state and feed logic for the carpark
//! status panel, completely independent of any UI framework. It can drive
//! the ratatui surface, another GUI, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UI Surface                        │
//! │              (carpark-tui, ratatui)                   │
//! │                        ▲                              │
//! │                 SourceMessage                         │
//! │                        │                              │
//! └────────────────────────┼──────────────────────────────┘
//!                          │ tokio mpsc
//! ┌────────────────────────┼──────────────────────────────┐
//! │                 CARPARK CORE                          │
//! │  ┌──────────┐  ┌──────────┐  ┌─────────────────────┐  │
//! │  │  Panel   │  │ Decoder  │  │    Status Source    │  │
//! │  │  State   │  │  (JSON)  │  │ (broker / simulated)│  │
//! │  └──────────┘  └──────────┘  └─────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Panel`]: the displayed rows (field name + current value)
//! - [`UpdatePayload`]: a complete field-name → display-string mapping
//! - [`SourceMessage`]: messages a feed task sends to the surface
//! - [`PayloadDecoder`]: pluggable raw-message → payload decoding
//! - [`SourceHandle`]: owned handle for a running feed task
//!
//! # Concurrency Contract
//!
//! A feed task never touches display state directly. It sends immutable
//! [`SourceMessage`] values over a bounded mpsc channel; the surface drains
//! the channel on its own thread and repaints. If updates arrive faster
//! than frames are drawn, the surface drains everything before drawing, so
//! the most recent payload wins.
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decode;
pub mod fields;
pub mod messages;
pub mod panel;
pub mod payload;
pub mod source;

// Re-exports for convenience
pub use config::{BrokerConfig, CARPARK_NAME, FIELD_AT, FIELD_BAYS, FIELD_TEMPERATURE};
pub use decode::{DecodeError, JsonDecoder, PayloadDecoder};
pub use fields::{FieldSet, FieldSetError, PLACEHOLDER};
pub use messages::{FeedState, SourceMessage};
pub use panel::{Panel, PanelError, Row};
pub use payload::UpdatePayload;
pub use source::{ReconnectPolicy, SourceHandle};
