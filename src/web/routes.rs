//! The `index` route: list the board on `GET`, accept submissions on `POST`.

use super::{
    error::WebError,
    render::{INDEX_TEMPLATE, PageRenderer, RenderError},
};
use crate::task::{
    form::{TaskFormInput, TaskFormState},
    ports::{CategoryRepository, TaskRepository},
    services::{CreateOutcome, TaskBoard, TaskBoardService},
};
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Path of the single task board page.
pub const INDEX_PATH: &str = "/";

/// Response header naming the template a page was rendered from.
pub const TEMPLATE_HEADER: &str = "x-template";

/// Shared request-handling state.
pub struct AppState<R, C>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    service: TaskBoardService<R, C>,
    renderer: PageRenderer,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates request state around a task board service.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the page template does not compile.
    pub fn new(service: TaskBoardService<R, C>) -> Result<Self, RenderError> {
        Ok(Self {
            service,
            renderer: PageRenderer::new(INDEX_PATH)?,
        })
    }

    fn render(&self, board: &TaskBoard, form: &TaskFormState) -> Result<Response, WebError> {
        let body = self.renderer.render_index(board, form)?;
        Ok(([(TEMPLATE_HEADER, INDEX_TEMPLATE)], Html(body)).into_response())
    }
}

/// Builds the application router.
pub fn router<R, C>(state: Arc<AppState<R, C>>) -> Router
where
    R: TaskRepository + CategoryRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            INDEX_PATH,
            get(show_index::<R, C>).post(submit_task::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_index<R, C>(State(state): State<Arc<AppState<R, C>>>) -> Result<Response, WebError>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    let board = state.service.list().await?;
    state.render(&board, &TaskFormState::empty())
}

async fn submit_task<R, C>(
    State(state): State<Arc<AppState<R, C>>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, WebError>
where
    R: TaskRepository + CategoryRepository,
    C: Clock + Send + Sync,
{
    let input = match body {
        Ok(Form(pairs)) => pairs.into_iter().collect::<TaskFormInput>(),
        Err(rejection) => {
            debug!(reason = %rejection, "unreadable form body treated as empty");
            TaskFormInput::new()
        }
    };
    match state.service.create(input).await? {
        CreateOutcome::Created(_) => Ok(Redirect::to(INDEX_PATH).into_response()),
        CreateOutcome::Rejected(form) => {
            let board = state.service.list().await?;
            state.render(&board, &form)
        }
    }
}
