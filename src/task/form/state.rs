//! Form state handed to the renderer.

use super::{FormErrors, TaskFormInput};
use serde::Serialize;

/// Creation form as it should be displayed: the submitted values (empty for
/// a fresh form) and any per-field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFormState {
    /// Values to pre-populate the form with.
    pub input: TaskFormInput,
    /// Errors to display inline.
    pub errors: FormErrors,
}

impl TaskFormState {
    /// Creates an empty, error-free form.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a rejected form that echoes `input` alongside `errors`.
    #[must_use]
    pub const fn rejected(input: TaskFormInput, errors: FormErrors) -> Self {
        Self { input, errors }
    }

    /// Returns `true` when the form carries errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
