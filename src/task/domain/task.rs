//! Task entity and the validated values used to create one.

use super::{CategoryId, TaskId, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task values awaiting persistence.
///
/// Produced by the task form once every field has passed validation. The
/// datastore assigns the identifier when the values are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
    /// Category the task belongs to.
    pub category_id: CategoryId,
}

impl NewTask {
    /// Creates an incomplete task value.
    #[must_use]
    pub const fn new(title: TaskTitle, due_date: NaiveDate, category_id: CategoryId) -> Self {
        Self {
            title,
            due_date,
            completed: false,
            category_id,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    due_date: NaiveDate,
    completed: bool,
    category_id: CategoryId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted category reference.
    pub category_id: CategoryId,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            due_date: data.due_date,
            completed: data.completed,
            category_id: data.category_id,
        }
    }

    /// Combines validated values with a datastore-assigned identifier.
    #[must_use]
    pub fn from_new(id: TaskId, task: NewTask) -> Self {
        Self {
            id,
            title: task.title,
            due_date: task.due_date,
            completed: task.completed,
            category_id: task.category_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the referenced category.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Returns whether the task is still open and its due date has passed.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
