//! Validation error types.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::address::AddressField;

/// A single rule violation on one form field.
///
/// The display text is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    /// A required field was left empty.
    #[error("{message}")]
    Required { message: &'static str },

    /// The field is non-empty but shorter than its minimum length.
    #[error("{message}")]
    TooShort { min: usize, message: &'static str },
}

impl FieldError {
    /// Returns the user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required { message } | FieldError::TooShort { message, .. } => *message,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FieldError::Required { .. })
    }

    pub fn is_too_short(&self) -> bool {
        matches!(self, FieldError::TooShort { .. })
    }
}

/// Every field error produced by one validation pass, keyed by field.
///
/// At most one error is kept per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("address failed validation on {} field(s)", .fields.len())]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<AddressField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: AddressField, error: FieldError) {
        self.fields.insert(field, error);
    }

    /// Drops the error recorded for a field, if any.
    pub fn clear(&mut self, field: AddressField) {
        self.fields.remove(&field);
    }

    pub fn get(&self, field: AddressField) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressField, &FieldError)> {
        self.fields.iter().map(|(field, error)| (*field, error))
    }
}
