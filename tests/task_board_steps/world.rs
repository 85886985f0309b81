//! Shared world state for task board BDD scenarios.

use crate::test_helpers::FixedClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskBoardRepository,
    domain::Category,
    form::TaskFormInput,
    services::{CreateOutcome, RecordBrowser, TaskBoard, TaskBoardService},
};

/// Service type used by the BDD world.
pub type TestTaskBoardService = TaskBoardService<InMemoryTaskBoardRepository, FixedClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestTaskBoardService,
    pub browser: RecordBrowser<InMemoryTaskBoardRepository>,
    pub pending_form: Option<TaskFormInput>,
    pub last_outcome: Option<CreateOutcome>,
    pub last_board: Option<TaskBoard>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskBoardRepository::new());
        Self {
            service: TaskBoardService::new(
                Arc::clone(&repository),
                Arc::new(FixedClock::today()),
            ),
            browser: RecordBrowser::new(repository),
            pending_form: None,
            last_outcome: None,
            last_board: None,
        }
    }

    /// Finds a previously created category by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no category has that name or the store fails.
    pub fn category_named(&self, name: &str) -> Result<Category, eyre::Report> {
        run_async(self.browser.categories())?
            .into_iter()
            .find(|category| category.name().as_str() == name)
            .ok_or_else(|| eyre::eyre!("no category named {name} in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
