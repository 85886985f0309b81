//! Generic record browsing over categories and tasks.
//!
//! Backs the administrative tool: categories are created here, and both
//! record types can be listed in identifier order. No task business logic
//! lives in this service.

use crate::task::{
    domain::{Category, CategoryId, CategoryName, Task, TaskDomainError, TaskId},
    ports::{CategoryRepository, RepositoryError, TaskRepository},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors returned by record browsing operations.
#[derive(Debug, Error)]
pub enum RecordBrowserError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Administrative record browser.
#[derive(Clone)]
pub struct RecordBrowser<R>
where
    R: TaskRepository + CategoryRepository,
{
    repository: Arc<R>,
}

impl<R> RecordBrowser<R>
where
    R: TaskRepository + CategoryRepository,
{
    /// Creates a record browser over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBrowserError::Domain`] when the name is blank, or
    /// [`RecordBrowserError::Repository`] when the datastore fails.
    pub async fn create_category(&self, name: &str) -> Result<Category, RecordBrowserError> {
        let category_name = CategoryName::new(name)?;
        let category = self.repository.store_category(&category_name).await?;
        info!(category_id = %category.id(), name = %category.name(), "category created");
        Ok(category)
    }

    /// Creates each named category in order.
    ///
    /// # Errors
    ///
    /// Stops at the first blank name or datastore failure; categories created
    /// before it are kept.
    pub async fn seed_categories(
        &self,
        names: &[String],
    ) -> Result<Vec<Category>, RecordBrowserError> {
        let mut created = Vec::with_capacity(names.len());
        for name in names {
            created.push(self.create_category(name).await?);
        }
        Ok(created)
    }

    /// Looks up one category.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBrowserError::Repository`] when the datastore fails.
    pub async fn category(&self, id: CategoryId) -> Result<Option<Category>, RecordBrowserError> {
        Ok(self.repository.find_category(id).await?)
    }

    /// Looks up one task.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBrowserError::Repository`] when the datastore fails.
    pub async fn task(&self, id: TaskId) -> Result<Option<Task>, RecordBrowserError> {
        Ok(self.repository.find_task(id).await?)
    }

    /// Lists categories in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBrowserError::Repository`] when the datastore fails.
    pub async fn categories(&self) -> Result<Vec<Category>, RecordBrowserError> {
        Ok(self.repository.list_categories().await?)
    }

    /// Lists tasks in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBrowserError::Repository`] when the datastore fails.
    pub async fn tasks(&self) -> Result<Vec<Task>, RecordBrowserError> {
        Ok(self.repository.list_tasks().await?)
    }
}
