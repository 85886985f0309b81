//! `SQLite` integration tests for the task board service.

use super::helpers::{TestDatabase, database};
use crate::test_helpers::FixedClock;
use rstest::rstest;
use std::sync::Arc;
use taskboard::task::{
    domain::CategoryName,
    form::{FieldError, TaskField, TaskFormInput},
    services::{CreateOutcome, RecordBrowser, TaskBoardService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submission_is_listed_in_the_matching_group(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let browser = RecordBrowser::new(Arc::clone(&db.repository));
    let service = TaskBoardService::new(Arc::clone(&db.repository), Arc::new(FixedClock::today()));
    let errands = browser.create_category("Errands").await?;

    let outcome = service
        .create(
            TaskFormInput::new()
                .with_title("Return library books")
                .with_due_date("2026-10-18")
                .with_completed("on")
                .with_category(errands.id()),
        )
        .await?;
    let board = service.list().await?;

    let CreateOutcome::Created(task) = outcome else {
        return Err(eyre::eyre!("expected the task to be created"));
    };
    assert!(board.to_do_tasks.is_empty());
    assert_eq!(board.done_tasks, vec![task.clone()]);
    assert_eq!(board.overdue_tasks().count(), 0);
    assert_eq!(
        board.category_name(task.category_id()).map(CategoryName::as_str),
        Some("Errands")
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_deleted_before_submission_is_an_invalid_choice(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let browser = RecordBrowser::new(Arc::clone(&db.repository));
    let service = TaskBoardService::new(Arc::clone(&db.repository), Arc::new(FixedClock::today()));
    let category = browser.create_category("Short-lived").await?;
    db.execute(&format!(
        "DELETE FROM categories WHERE id = {};",
        category.id()
    ))?;

    let outcome = service
        .create(
            TaskFormInput::new()
                .with_title("Too late")
                .with_due_date("2026-10-20")
                .with_category(category.id()),
        )
        .await?;

    let CreateOutcome::Rejected(form) = outcome else {
        return Err(eyre::eyre!("expected the submission to be rejected"));
    };
    assert_eq!(
        form.errors.get(TaskField::Category),
        [FieldError::InvalidChoice]
    );
    assert!(browser.tasks().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn extreme_due_dates_keep_date_order(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let browser = RecordBrowser::new(Arc::clone(&db.repository));
    let service = TaskBoardService::new(Arc::clone(&db.repository), Arc::new(FixedClock::today()));
    let category = browser.create_category("Someday").await?;

    let mut rejected = Vec::new();
    for due in ["9999-12-31", "+12345-01-01", "2026-10-20", "0001-01-01"] {
        let outcome = service
            .create(
                TaskFormInput::new()
                    .with_title(due)
                    .with_due_date(due)
                    .with_category(category.id()),
            )
            .await?;
        if let CreateOutcome::Rejected(form) = outcome {
            assert_eq!(form.errors.get(TaskField::DueDate), [FieldError::InvalidDate]);
            rejected.push(due);
        }
    }
    let board = service.list().await?;

    let listed: Vec<&str> = board
        .to_do_tasks
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(rejected, ["+12345-01-01"]);
    assert_eq!(listed, ["0001-01-01", "2026-10-20", "9999-12-31"]);
    Ok(())
}
