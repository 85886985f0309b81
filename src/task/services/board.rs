//! Service layer for listing tasks and accepting new task submissions.

use crate::task::{
    domain::{Category, CategoryId, CategoryName, Task},
    form::{FieldError, TaskField, TaskFormInput, TaskFormState, validate_task_form},
    ports::{CategoryRepository, RepositoryError, TaskRepository},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Tasks split into the to-do and done groups, each ordered by due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    /// Tasks that are not completed.
    pub to_do_tasks: Vec<Task>,
    /// Tasks that are completed.
    pub done_tasks: Vec<Task>,
    /// Every category, ordered by identifier; the form's category choices.
    pub categories: Vec<Category>,
    /// Date the board was read on, used to flag overdue tasks.
    pub today: NaiveDate,
}

impl TaskBoard {
    /// Returns the name of the category with the given identifier.
    #[must_use]
    pub fn category_name(&self, id: CategoryId) -> Option<&CategoryName> {
        self.categories
            .iter()
            .find(|category| category.id() == id)
            .map(Category::name)
    }

    /// Returns the to-do tasks whose due date has passed.
    pub fn overdue_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.to_do_tasks
            .iter()
            .filter(|task| task.is_overdue(self.today))
    }
}

/// Result of a task submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The task passed validation and was persisted.
    Created(Task),
    /// The submission was rejected; nothing was persisted.
    Rejected(TaskFormState),
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Reads the board: to-do and done tasks plus the category choices.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when a datastore query fails.
    pub async fn list(&self) -> TaskBoardResult<TaskBoard> {
        let to_do_tasks = self.repository.list_by_completion(false).await?;
        let done_tasks = self.repository.list_by_completion(true).await?;
        let categories = self.repository.list_categories().await?;
        Ok(TaskBoard {
            to_do_tasks,
            done_tasks,
            categories,
            today: self.clock.utc().date_naive(),
        })
    }

    /// Validates a submission and persists it when every field is valid.
    ///
    /// Invalid submissions are returned as [`CreateOutcome::Rejected`] with
    /// the original input and per-field errors; they are never faults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the datastore fails.
    pub async fn create(&self, input: TaskFormInput) -> TaskBoardResult<CreateOutcome> {
        let categories = self.repository.list_categories().await?;
        let new_task = match validate_task_form(&input, &categories) {
            Ok(new_task) => new_task,
            Err(errors) => {
                debug!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "task submission rejected"
                );
                return Ok(CreateOutcome::Rejected(TaskFormState::rejected(
                    input, errors,
                )));
            }
        };

        match self.repository.store_task(&new_task).await {
            Ok(task) => {
                info!(
                    task_id = %task.id(),
                    category_id = %task.category_id(),
                    due_date = %task.due_date(),
                    "task created"
                );
                Ok(CreateOutcome::Created(task))
            }
            Err(RepositoryError::UnknownCategory(category_id)) => {
                debug!(%category_id, "category vanished before the task was stored");
                let mut rejected = TaskFormState::rejected(input, Default::default());
                rejected
                    .errors
                    .add(TaskField::Category, FieldError::InvalidChoice);
                Ok(CreateOutcome::Rejected(rejected))
            }
            Err(err) => Err(err.into()),
        }
    }
}
