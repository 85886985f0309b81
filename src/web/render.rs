//! HTML rendering of the task board page.

use crate::task::{
    domain::{CategoryName, Task, TaskTitle},
    form::{TaskFormState, rules::parse_completed},
    services::TaskBoard,
};
use minijinja::Environment;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Name of the task board template.
pub const INDEX_TEMPLATE: &str = "tasks/index.html";

const INDEX_SOURCE: &str = include_str!("../../templates/tasks/index.html");

/// Errors raised while rendering pages.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders the task board page from a board snapshot and a form state.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
    action: String,
}

#[derive(Debug, Serialize)]
struct IndexView<'a> {
    to_do_tasks: Vec<TaskView<'a>>,
    done_tasks: Vec<TaskView<'a>>,
    categories: Vec<CategoryChoice<'a>>,
    form: FormView<'a>,
    action: &'a str,
    title_max_length: usize,
}

#[derive(Debug, Serialize)]
struct TaskView<'a> {
    id: i64,
    title: &'a str,
    due_date: String,
    completed: bool,
    category: &'a str,
    overdue: bool,
}

#[derive(Debug, Serialize)]
struct CategoryChoice<'a> {
    id: i64,
    name: &'a str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct FormView<'a> {
    title: &'a str,
    due_date: &'a str,
    completed: bool,
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl PageRenderer {
    /// Creates a renderer whose form posts to `action`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the embedded template does not
    /// compile.
    pub fn new(action: impl Into<String>) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
        Ok(Self {
            env,
            action: action.into(),
        })
    }

    /// Renders the task board page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render_index(
        &self,
        board: &TaskBoard,
        form: &TaskFormState,
    ) -> Result<String, RenderError> {
        let selected_category = form.input.category.as_deref().map(str::trim);
        let view = IndexView {
            to_do_tasks: board
                .to_do_tasks
                .iter()
                .map(|task| task_view(board, task))
                .collect(),
            done_tasks: board
                .done_tasks
                .iter()
                .map(|task| task_view(board, task))
                .collect(),
            categories: board
                .categories
                .iter()
                .map(|category| {
                    let id = category.id().value();
                    CategoryChoice {
                        id,
                        name: category.name().as_str(),
                        selected: selected_category
                            .is_some_and(|raw| raw.parse::<i64>().is_ok_and(|value| value == id)),
                    }
                })
                .collect(),
            form: FormView {
                title: form.input.title.as_deref().unwrap_or_default(),
                due_date: form.input.due_date.as_deref().unwrap_or_default(),
                completed: parse_completed(form.input.completed.as_deref()),
                errors: form.errors.messages(),
            },
            action: &self.action,
            title_max_length: TaskTitle::MAX_LENGTH,
        };

        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(&view)?)
    }
}

fn task_view<'a>(board: &'a TaskBoard, task: &'a Task) -> TaskView<'a> {
    TaskView {
        id: task.id().value(),
        title: task.title().as_str(),
        due_date: task.due_date().format("%Y-%m-%d").to_string(),
        completed: task.completed(),
        category: board
            .category_name(task.category_id())
            .map(CategoryName::as_str)
            .unwrap_or_default(),
        overdue: task.is_overdue(board.today),
    }
}
