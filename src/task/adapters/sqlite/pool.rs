//! Connection pool construction and schema bootstrap.

use crate::task::ports::{RepositoryError, RepositoryResult};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

/// `SQLite` connection pool type used by task board adapters.
pub type TaskBoardPool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema applied at start-up; every statement is idempotent.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_categories_and_tasks/up.sql");

/// Per-connection settings. `SQLite` leaves foreign keys off unless asked.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the database at `database_url`.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the initial connections
/// cannot be established.
pub fn build_pool(database_url: &str, max_size: u32) -> RepositoryResult<TaskBoardPool> {
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
        .map_err(RepositoryError::persistence)
}

/// Creates the category and task tables when they do not exist yet.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when a connection cannot be
/// checked out or the schema statements fail.
pub fn apply_schema(pool: &TaskBoardPool) -> RepositoryResult<()> {
    let mut connection = pool.get().map_err(RepositoryError::persistence)?;
    connection
        .batch_execute(SCHEMA_SQL)
        .map_err(RepositoryError::persistence)
}
