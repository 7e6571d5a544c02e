//! Carpark TUI - Terminal surface for the Moondalup status display
//!
//! This crate renders the carpark panel in a full-screen terminal window:
//! one row per field, a status line for the feed connection, nothing else.
//!
//! # Architecture
//!
//! - **App**: surface state and the render/event loop
//! - **Ui**: ratatui layout for the panel and status line
//! - **Theme**: color constants
//!
//! All data arrives from `carpark-core` as `SourceMessage`s over an mpsc
//! channel; the loop drains the channel before every draw so the most
//! recent update is what gets painted.

pub mod app;
pub mod theme;
pub mod ui;

pub use app::App;
