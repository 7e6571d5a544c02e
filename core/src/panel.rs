//! Panel State
//!
//! The panel is the displayed state: one row per field, pairing the field
//! name with its current display value. Surfaces render rows in order and
//! never mutate them directly; the only mutation entrypoint is
//! [`Panel::apply`].
//!
//! # Design Philosophy
//!
//! The surface is a thin renderer. It owns a `Panel`, drains feed messages
//! on its own thread, applies them here, and repaints. Rows are built once
//! from the field set; fields cannot be added or removed afterwards.

use thiserror::Error;

use crate::fields::{FieldSet, PLACEHOLDER};
use crate::payload::UpdatePayload;

/// Errors from applying an update payload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    /// The payload lacks a value for a displayed field.
    ///
    /// Nothing was changed: coverage is validated before any row is
    /// touched, so a failed apply leaves every value as it was.
    #[error("update payload is missing field {0:?}")]
    MissingField(String),
}

/// One visual row: a field label and its current display value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    name: String,
    value: String,
}

impl Row {
    /// The field name shown as the row label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current display value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The display panel: a title plus one row per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    title: String,
    rows: Vec<Row>,
}

impl Panel {
    /// Create a panel with every value at the placeholder.
    #[must_use]
    pub fn new(title: impl Into<String>, fields: &FieldSet) -> Self {
        let rows = fields
            .iter()
            .map(|name| Row {
                name: name.to_string(),
                value: PLACEHOLDER.to_string(),
            })
            .collect();
        Self {
            title: title.into(),
            rows,
        }
    }

    /// The panel title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current value for a field, if it is displayed.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.name == field)
            .map(|row| row.value.as_str())
    }

    /// Apply a complete update payload to every row.
    ///
    /// All-or-nothing: coverage of every displayed field is checked before
    /// any row is mutated, so an incomplete payload changes nothing.
    /// Extra keys in the payload are ignored. Applying the same payload
    /// twice is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingField`] if any displayed field has no
    /// entry in the payload.
    pub fn apply(&mut self, payload: &UpdatePayload) -> Result<(), PanelError> {
        for row in &self.rows {
            if payload.get(&row.name).is_none() {
                return Err(PanelError::MissingField(row.name.clone()));
            }
        }
        for row in &mut self.rows {
            if let Some(value) = payload.get(&row.name) {
                value.clone_into(&mut row.value);
            }
        }
        Ok(())
    }
}
