//! Shared test helpers for in-memory repository integration tests.

use crate::test_helpers::FixedClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskBoardRepository,
    domain::Category,
    services::{RecordBrowser, TaskBoardService},
};

/// Service type exercised by the in-memory suites.
pub type TestService = TaskBoardService<InMemoryTaskBoardRepository, FixedClock>;

/// Task board service and record browser sharing one repository.
pub struct Board {
    /// Task board service under test.
    pub service: TestService,
    /// Record browser over the same repository.
    pub browser: RecordBrowser<InMemoryTaskBoardRepository>,
}

impl Board {
    /// Creates a category through the record browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the category cannot be stored.
    pub async fn category(&self, name: &str) -> Result<Category, eyre::Report> {
        Ok(self.browser.create_category(name).await?)
    }
}

/// Provides an empty board whose clock reads [`crate::test_helpers::TODAY`].
#[fixture]
pub fn board() -> Board {
    let repository = Arc::new(InMemoryTaskBoardRepository::new());
    Board {
        service: TaskBoardService::new(Arc::clone(&repository), Arc::new(FixedClock::today())),
        browser: RecordBrowser::new(repository),
    }
}
