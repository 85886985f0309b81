//! Repository ports for category and task persistence.

use crate::task::domain::{Category, CategoryId, CategoryName, NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the datastore fails.
    async fn store_category(&self, name: &CategoryName) -> RepositoryResult<Category>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;

    /// Returns every category ordered by identifier.
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnknownCategory`] when the referenced
    /// category does not exist at insert time.
    async fn store_task(&self, task: &NewTask) -> RepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns the tasks whose completion flag equals `completed`, ordered by
    /// ascending due date with ties broken by identifier.
    async fn list_by_completion(&self, completed: bool) -> RepositoryResult<Vec<Task>>;

    /// Returns every task ordered by identifier.
    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The referenced category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
