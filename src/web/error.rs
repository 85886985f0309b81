//! HTTP error mapping.

use super::render::RenderError;
use crate::task::services::TaskBoardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Server-side failures while handling a request.
///
/// Validation failures never reach this type; they are rendered as part of
/// the page.
#[derive(Debug, Error)]
pub enum WebError {
    /// The task board service failed.
    #[error(transparent)]
    Board(#[from] TaskBoardError),
    /// The page could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
