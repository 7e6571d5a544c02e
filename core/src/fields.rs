//! Field Model
//!
//! The panel shows a fixed, ordered set of named fields. The set is built
//! once at construction and never changes for the lifetime of a display;
//! row identity is derived from the field name, so names must be unique.

use std::collections::HashSet;

use thiserror::Error;

/// Sentinel shown for a field until its first update arrives.
pub const PLACEHOLDER: &str = "– – –";

/// Errors from [`FieldSet`] construction.
///
/// These are fatal: no display is usable without a valid field list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldSetError {
    /// The field list was empty.
    #[error("display needs at least one field")]
    Empty,
    /// Two fields share a name, so rows could not be told apart.
    #[error("duplicate field name: {0:?}")]
    Duplicate(String),
}

/// An immutable, ordered list of unique field names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    names: Vec<String>,
}

impl FieldSet {
    /// Create a field set from an ordered sequence of names.
    ///
    /// # Errors
    ///
    /// Returns [`FieldSetError::Empty`] for an empty sequence and
    /// [`FieldSetError::Duplicate`] if any name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, FieldSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(FieldSetError::Empty);
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(FieldSetError::Duplicate(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty (never true for a constructed set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is one of the displayed fields.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate field names in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
