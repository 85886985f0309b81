//! HTTP surface of the task board.
//!
//! A single route serves the page: `GET /` renders the board with an empty
//! creation form, `POST /` validates a submission and either redirects back
//! to `/` or re-renders the page with the submitted values and inline
//! errors.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;

pub use config::{Config, ConfigError, Datastore, IN_MEMORY_URL};
pub use error::WebError;
pub use render::{INDEX_TEMPLATE, PageRenderer, RenderError};
pub use routes::{AppState, INDEX_PATH, TEMPLATE_HEADER, router};

use crate::task::{
    ports::{CategoryRepository, TaskRepository},
    services::TaskBoardService,
};
use axum::Router;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The page template does not compile.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Builds the application around a task board service.
///
/// # Errors
///
/// Returns [`RenderError`] when the page template does not compile.
pub fn app<R, C>(service: TaskBoardService<R, C>) -> Result<Router, RenderError>
where
    R: TaskRepository + CategoryRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(router(Arc::new(AppState::new(service)?)))
}

/// Serves the application until Ctrl+C or `SIGTERM`.
///
/// # Errors
///
/// Returns [`ServerError`] when the listener cannot be bound or the server
/// fails.
pub async fn serve<R, C>(config: &Config, service: TaskBoardService<R, C>) -> Result<(), ServerError>
where
    R: TaskRepository + CategoryRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let app = app(service)?;
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
