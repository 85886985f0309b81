//! `SQLite` repository implementation for categories and tasks.

use super::{
    models::{CategoryRow, NewCategoryRow, NewTaskRow, TaskRow},
    pool::TaskBoardPool,
    schema::{categories, tasks},
};
use crate::task::{
    domain::{
        Category, CategoryId, CategoryName, NewTask, PersistedTaskData, Task, TaskId, TaskTitle,
    },
    ports::{CategoryRepository, RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// `SQLite`-backed repository for categories and tasks.
#[derive(Debug, Clone)]
pub struct SqliteTaskBoardRepository {
    pool: TaskBoardPool,
}

impl SqliteTaskBoardRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: TaskBoardPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for SqliteTaskBoardRepository {
    async fn store_category(&self, name: &CategoryName) -> RepositoryResult<Category> {
        let new_row = NewCategoryRow {
            name: name.as_str().to_owned(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(categories::table)
                .values(&new_row)
                .returning(CategoryRow::as_returning())
                .get_result::<CategoryRow>(connection)
                .map_err(RepositoryError::persistence)?;
            row_to_category(row)
        })
        .await
    }

    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.value()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.run_blocking(|connection| {
            categories::table
                .order(categories::id.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_category)
                .collect::<RepositoryResult<Vec<_>>>()
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskBoardRepository {
    async fn store_task(&self, task: &NewTask) -> RepositoryResult<Task> {
        let category_id = task.category_id;
        let new_row = NewTaskRow {
            title: task.title.as_str().to_owned(),
            due_date: task.due_date,
            completed: task.completed,
            category_id: category_id.value(),
        };

        self.run_blocking(move |connection| {
            // The pre-check gives a semantic error for the common case; the
            // foreign key still guards the window between check and insert.
            let known = categories::table
                .filter(categories::id.eq(category_id.value()))
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::persistence)?;
            if known == 0 {
                return Err(RepositoryError::UnknownCategory(category_id));
            }

            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        RepositoryError::UnknownCategory(category_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            row_to_task(row)
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_completion(&self, completed: bool) -> RepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::completed.eq(completed))
                .order((tasks::due_date.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect::<RepositoryResult<Vec<_>>>()
        })
        .await
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect::<RepositoryResult<Vec<_>>>()
        })
        .await
    }
}

fn row_to_category(row: CategoryRow) -> RepositoryResult<Category> {
    let CategoryRow { id, name } = row;
    let category_id = CategoryId::new(id).map_err(RepositoryError::persistence)?;
    let category_name = CategoryName::new(name).map_err(RepositoryError::persistence)?;
    Ok(Category::from_persisted(category_id, category_name))
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        due_date,
        completed,
        category_id,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(RepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(RepositoryError::persistence)?,
        due_date,
        completed,
        category_id: CategoryId::new(category_id).map_err(RepositoryError::persistence)?,
    };
    Ok(Task::from_persisted(data))
}
