//! Diesel row models for task board persistence.

use super::schema::{categories, tasks};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    /// Category identifier.
    pub id: i64,
    /// Category label.
    pub name: String,
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Category label.
    pub name: String,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
    /// Owning category.
    pub category_id: i64,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
    /// Owning category.
    pub category_id: i64,
}
