//! Theme and Colors
//!
//! A restrained palette for a sign that mostly gets glanced at from a
//! distance: bright values, dim labels, one accent for the title.

use ratatui::style::Color;

// ============================================================================
// Panel Colors
// ============================================================================

/// Title accent
pub const TITLE: Color = Color::Rgb(120, 200, 255);

/// Field labels
pub const LABEL: Color = Color::Rgb(140, 140, 140);

/// Field values (the part that matters)
pub const VALUE: Color = Color::Rgb(235, 235, 235);

/// Placeholder values before the first update
pub const PLACEHOLDER_VALUE: Color = Color::Rgb(100, 100, 100);

// ============================================================================
// Status Line Colors
// ============================================================================

/// Feed is live
pub const FEED_LIVE: Color = Color::Rgb(120, 230, 120);

/// Feed is connecting/retrying
pub const FEED_CONNECTING: Color = Color::Rgb(255, 200, 100);

/// Feed is offline
pub const FEED_OFFLINE: Color = Color::Rgb(255, 100, 100);

/// Dim status text
pub const STATUS_DIM: Color = Color::Rgb(100, 100, 100);
