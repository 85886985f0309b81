//! Field-level validation errors for the task form.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Task form fields that can carry errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// The `title` field.
    Title,
    /// The `due_date` field.
    DueDate,
    /// The `category` field.
    Category,
}

impl TaskField {
    /// Returns the field name used in submitted forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::DueDate => "due_date",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is absent or blank.
    #[error("This field is required.")]
    Required,

    /// The value is longer than allowed.
    #[error("Ensure this value has at most {max} characters (it has {length}).")]
    TooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Submitted length in characters.
        length: usize,
    },

    /// The value is not a calendar date.
    #[error("Enter a valid date.")]
    InvalidDate,

    /// The value does not name one of the offered choices.
    #[error("Select a valid choice. That choice is not one of the available choices.")]
    InvalidChoice,
}

/// Errors collected across all form fields, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<TaskField, Vec<FieldError>>,
}

impl FormErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against `field`.
    pub fn add(&mut self, field: TaskField, error: FieldError) {
        self.fields.entry(field).or_default().push(error);
    }

    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` when `field` has at least one error.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns the errors recorded against `field`.
    #[must_use]
    pub fn get(&self, field: TaskField) -> &[FieldError] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the fields that have errors, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = TaskField> + '_ {
        self.fields.keys().copied()
    }

    /// Returns the error messages keyed by submitted field name.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<&'static str, Vec<String>> {
        self.fields
            .iter()
            .map(|(field, errors)| {
                let messages = errors.iter().map(ToString::to_string).collect();
                (field.as_str(), messages)
            })
            .collect()
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}
