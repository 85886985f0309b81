//! Task board HTTP server.
//!
//! Reads [`Config`] from the environment, opens the configured datastore,
//! and serves the task board page until interrupted.

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    logging,
    task::{
        adapters::{
            memory::InMemoryTaskBoardRepository,
            sqlite::{SqliteTaskBoardRepository, apply_schema, build_pool},
        },
        services::{RecordBrowser, TaskBoardService},
    },
    web::{self, Config, Datastore},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    logging::init()?;
    let config = Config::from_env()?;

    match &config.datastore {
        Datastore::InMemory { seed_categories } => {
            warn!("using the in-memory datastore; records are lost on exit");
            let repository = Arc::new(InMemoryTaskBoardRepository::new());
            let seeded = RecordBrowser::new(Arc::clone(&repository))
                .seed_categories(seed_categories)
                .await?;
            if seeded.is_empty() {
                warn!("no categories seeded; set TASKBOARD_SEED_CATEGORIES to accept tasks");
            }
            let service = TaskBoardService::new(repository, Arc::new(DefaultClock));
            web::serve(&config, service).await?;
        }
        Datastore::Sqlite { url, pool_size } => {
            let pool = build_pool(url, *pool_size)?;
            apply_schema(&pool)?;
            info!(database = %url, "database ready");
            let repository = Arc::new(SqliteTaskBoardRepository::new(pool));
            let service = TaskBoardService::new(repository, Arc::new(DefaultClock));
            web::serve(&config, service).await?;
        }
    }

    Ok(())
}
