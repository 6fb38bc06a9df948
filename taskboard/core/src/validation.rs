//! Field rules for the task form.
//!
//! Every field is required and bounded in length. A field reports at most one
//! message at a time, picked in the order required, minimum, maximum.

use crate::task::{Field, TaskDraft};
use std::collections::BTreeMap;
use thiserror::Error;

/// Static constraints for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub min_len: usize,
    pub max_len: usize,
}

/// A single failed rule. The `Display` output is the inline message shown under the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required.")]
    Required(Field),
    #[error("Minimum {min} characters required.")]
    TooShort { min: usize },
    #[error("Maximum {max} characters allowed.")]
    TooLong { max: usize },
}

/// All failing fields of a draft, keyed by field in form order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl Field {
    pub fn rule(self) -> FieldRule {
        let (min_len, max_len) = match self {
            Field::Title => (3, 25),
            Field::Type => (3, 10),
            Field::Description => (3, 150),
        };
        FieldRule {
            field: self,
            required: true,
            min_len,
            max_len,
        }
    }
}

impl FieldRule {
    /// Checks `value` against this rule. Length is counted in characters, and
    /// the value is taken as-is without trimming.
    ///
    /// A character outside the Basic Multilingual Plane (e.g. an emoji) counts
    /// once here, while a browser `minlength`/`maxlength` check counts it as two
    /// UTF-16 code units, so `"😀😀"` is too short for a 3-character minimum.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Required(self.field))
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if len < self.min_len {
            return Err(FieldError::TooShort { min: self.min_len });
        }
        if len > self.max_len {
            return Err(FieldError::TooLong { max: self.max_len });
        }
        Ok(())
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    /// Records the outcome of checking `field`, clearing any previous message on success.
    pub(crate) fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(field, err);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl TaskDraft {
    /// Validates every field, returning all failures at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.record(field, field.rule().check(self.get(field)));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
