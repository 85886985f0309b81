//! `SQLite` integration tests for the category and task repository.

use super::helpers::{TestDatabase, database};
use crate::test_helpers::date;
use rstest::rstest;
use taskboard::task::{
    adapters::sqlite::{SqliteTaskBoardRepository, apply_schema, build_pool},
    domain::{CategoryId, CategoryName, NewTask, TaskId, TaskTitle},
    ports::{CategoryRepository, RepositoryError, TaskRepository},
};

fn new_task(title: &str, due: &str, category_id: CategoryId) -> NewTask {
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        date(due),
        category_id,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_round_trips_through_the_database(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let category = db
        .repository
        .store_category(&CategoryName::new("Garden")?)
        .await?;

    let stored = db
        .repository
        .store_task(&new_task("Mow the lawn", "2026-10-25", category.id()).with_completed(true))
        .await?;
    let found = db.repository.find_task(stored.id()).await?;

    assert_eq!(found, Some(stored.clone()));
    assert_eq!(stored.title().as_str(), "Mow the lawn");
    assert_eq!(stored.due_date(), date("2026-10-25"));
    assert!(stored.completed());
    assert_eq!(stored.category_id(), category.id());
    assert_eq!(
        db.repository.find_category(category.id()).await?,
        Some(category)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_records_are_none(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;

    assert_eq!(db.repository.find_task(TaskId::new(42)?).await?, None);
    assert_eq!(db.repository.find_category(CategoryId::new(42)?).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_completion_orders_by_due_date_then_id(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let category = db
        .repository
        .store_category(&CategoryName::new("Chores")?)
        .await?;
    for (title, due, completed) in [
        ("b", "2026-10-22", false),
        ("a", "2026-10-21", false),
        ("c", "2026-10-22", false),
        ("d", "2026-10-01", true),
    ] {
        db.repository
            .store_task(&new_task(title, due, category.id()).with_completed(completed))
            .await?;
    }

    let to_do = db.repository.list_by_completion(false).await?;
    let done = db.repository.list_by_completion(true).await?;
    let all = db.repository.list_tasks().await?;

    let to_do_titles: Vec<&str> = to_do.iter().map(|task| task.title().as_str()).collect();
    let done_titles: Vec<&str> = done.iter().map(|task| task.title().as_str()).collect();
    let all_titles: Vec<&str> = all.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(to_do_titles, ["a", "b", "c"]);
    assert_eq!(done_titles, ["d"]);
    assert_eq!(all_titles, ["b", "a", "c", "d"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_a_task_for_an_unknown_category_fails(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let missing = CategoryId::new(7)?;

    let result = db
        .repository
        .store_task(&new_task("Orphan", "2026-10-20", missing))
        .await;

    assert!(matches!(result, Err(RepositoryError::UnknownCategory(id)) if id == missing));
    assert!(db.repository.list_tasks().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_category_deletes_its_tasks(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let kept = db
        .repository
        .store_category(&CategoryName::new("Kept")?)
        .await?;
    let dropped = db
        .repository
        .store_category(&CategoryName::new("Dropped")?)
        .await?;
    let survivor = db
        .repository
        .store_task(&new_task("Survivor", "2026-10-20", kept.id()))
        .await?;
    db.repository
        .store_task(&new_task("Casualty", "2026-10-20", dropped.id()))
        .await?;

    db.execute(&format!(
        "DELETE FROM categories WHERE id = {};",
        dropped.id()
    ))?;

    assert_eq!(db.repository.list_tasks().await?, vec![survivor]);
    assert_eq!(db.repository.list_categories().await?, vec![kept]);
    Ok(())
}

#[rstest]
#[case("INSERT INTO categories (name) VALUES ('   ');")]
#[case("INSERT INTO tasks (title, due_date, completed, category_id) VALUES ('', '2026-10-20', 0, 1);")]
fn schema_rejects_rows_the_domain_would_reject(
    database: Result<TestDatabase, eyre::Report>,
    #[case] sql: &str,
) -> Result<(), eyre::Report> {
    let db = database?;
    db.execute("INSERT INTO categories (name) VALUES ('Seed');")?;

    assert!(db.execute(sql).is_err());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_survive_reopening_the_database(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let category = db
        .repository
        .store_category(&CategoryName::new("Persistent")?)
        .await?;
    let task = db
        .repository
        .store_task(&new_task("Still here", "2026-10-20", category.id()))
        .await?;

    let reopened_pool = build_pool(&db.url, 1)?;
    apply_schema(&reopened_pool)?;
    let reopened = SqliteTaskBoardRepository::new(reopened_pool);

    assert_eq!(reopened.list_categories().await?, vec![category]);
    assert_eq!(reopened.list_tasks().await?, vec![task]);
    assert!(db.dir.path().join("taskboard.sqlite3").exists());
    Ok(())
}
