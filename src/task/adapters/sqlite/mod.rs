//! `SQLite` adapters for task board persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{SCHEMA_SQL, TaskBoardPool, apply_schema, build_pool};
pub use repository::SqliteTaskBoardRepository;
