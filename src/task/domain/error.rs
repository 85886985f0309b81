//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title has {length} characters, at most {max} allowed")]
    TitleTooLong {
        /// Length of the rejected title in characters.
        length: usize,
        /// Maximum permitted length in characters.
        max: usize,
    },

    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// An identifier is not a positive integer.
    #[error("invalid identifier {0}, expected a positive integer")]
    InvalidId(i64),
}
