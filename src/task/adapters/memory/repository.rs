//! In-memory repository backing both categories and tasks.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Category, CategoryId, CategoryName, NewTask, Task, TaskId},
    ports::{CategoryRepository, RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory datastore for categories and tasks.
///
/// Identifiers are assigned from monotonically increasing counters, so
/// insertion order and identifier order coincide.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskBoardRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    categories: BTreeMap<CategoryId, Category>,
    tasks: BTreeMap<TaskId, Task>,
    last_category_id: i64,
    last_task_id: i64,
}

impl InMemoryTaskBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryState>> {
        self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryState>> {
        self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn next_id(counter: &mut i64) -> i64 {
    *counter = counter.saturating_add(1);
    *counter
}

#[async_trait]
impl CategoryRepository for InMemoryTaskBoardRepository {
    async fn store_category(&self, name: &CategoryName) -> RepositoryResult<Category> {
        let mut state = self.write()?;
        let id = CategoryId::new(next_id(&mut state.last_category_id))
            .map_err(RepositoryError::persistence)?;
        let category = Category::from_persisted(id, name.clone());
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let state = self.read()?;
        Ok(state.categories.values().cloned().collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskBoardRepository {
    async fn store_task(&self, task: &NewTask) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        if !state.categories.contains_key(&task.category_id) {
            return Err(RepositoryError::UnknownCategory(task.category_id));
        }

        let id =
            TaskId::new(next_id(&mut state.last_task_id)).map_err(RepositoryError::persistence)?;
        let stored = Task::from_new(id, task.clone());
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_task(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_completion(&self, completed: bool) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.completed() == completed)
            .cloned()
            .collect();
        // BTreeMap iteration is already in id order; a stable sort keeps it
        // as the tie-breaker.
        tasks.sort_by_key(Task::due_date);
        Ok(tasks)
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }
}
