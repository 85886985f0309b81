//! Record browser for the task board datastore.
//!
//! Usage:
//!
//! ```text
//! taskboard_admin [--database <url>] [--json] category add <name>
//! taskboard_admin [--database <url>] [--json] category list
//! taskboard_admin [--database <url>] [--json] category show <id>
//! taskboard_admin [--database <url>] [--json] task list
//! taskboard_admin [--database <url>] [--json] task show <id>
//! ```
//!
//! Categories can only be created here; the web page only creates tasks.
//! The in-memory datastore lives inside the server process, so this tool
//! refuses `:memory:`; seed an in-memory server with
//! `TASKBOARD_SEED_CATEGORIES` instead.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;
use taskboard::{
    logging,
    task::{
        adapters::sqlite::{SqliteTaskBoardRepository, apply_schema, build_pool},
        domain::{Category, CategoryId, Task, TaskId},
        services::RecordBrowser,
    },
    web::IN_MEMORY_URL,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard_admin", about = "Browse and seed task board records")]
struct Cli {
    /// `SQLite` database path.
    #[arg(
        long,
        env = "TASKBOARD_DATABASE_URL",
        default_value = "taskboard.sqlite3"
    )]
    database: String,

    /// Print records as JSON instead of aligned columns.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Category records.
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Task records.
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
}

#[derive(Debug, Subcommand)]
enum CategoryAction {
    /// Create a category.
    Add {
        /// Category name.
        name: String,
    },
    /// List categories by identifier.
    List,
    /// Show one category.
    Show {
        /// Category identifier.
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    /// List tasks by identifier.
    List,
    /// Show one task.
    Show {
        /// Task identifier.
        id: i64,
    },
}

#[derive(Debug, Serialize)]
struct CategoryRecord<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct TaskRecord<'a> {
    id: i64,
    title: &'a str,
    due_date: String,
    completed: bool,
    category: i64,
}

impl<'a> From<&'a Category> for CategoryRecord<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            id: category.id().value(),
            name: category.name().as_str(),
        }
    }
}

impl<'a> From<&'a Task> for TaskRecord<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str(),
            due_date: task.due_date().format("%Y-%m-%d").to_string(),
            completed: task.completed(),
            category: task.category_id().value(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    logging::init()?;
    let cli = Cli::parse();
    if cli.database.trim() == IN_MEMORY_URL {
        eyre::bail!(
            "{IN_MEMORY_URL} names the server's private in-memory store; \
             set TASKBOARD_SEED_CATEGORIES on the server instead"
        );
    }

    let pool = build_pool(&cli.database, 1)?;
    apply_schema(&pool)?;
    let browser = RecordBrowser::new(Arc::new(SqliteTaskBoardRepository::new(pool)));
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Category {
            action: CategoryAction::Add { name },
        } => {
            let category = browser.create_category(&name).await?;
            write_categories(&mut out, &[category], cli.json)?;
        }
        Command::Category {
            action: CategoryAction::List,
        } => {
            let categories = browser.categories().await?;
            write_categories(&mut out, &categories, cli.json)?;
        }
        Command::Category {
            action: CategoryAction::Show { id },
        } => {
            let category = browser
                .category(CategoryId::new(id)?)
                .await?
                .ok_or_else(|| eyre::eyre!("no category with id {id}"))?;
            write_categories(&mut out, &[category], cli.json)?;
        }
        Command::Task {
            action: TaskAction::Show { id },
        } => {
            let task = browser
                .task(TaskId::new(id)?)
                .await?
                .ok_or_else(|| eyre::eyre!("no task with id {id}"))?;
            write_tasks(&mut out, &[task], cli.json)?;
        }
        Command::Task {
            action: TaskAction::List,
        } => {
            let tasks = browser.tasks().await?;
            write_tasks(&mut out, &tasks, cli.json)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_categories(out: &mut impl Write, categories: &[Category], json: bool) -> eyre::Result<()> {
    let records: Vec<CategoryRecord<'_>> = categories.iter().map(CategoryRecord::from).collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{:>6}  name", "id")?;
    for record in &records {
        writeln!(out, "{:>6}  {}", record.id, record.name)?;
    }
    Ok(())
}

fn write_tasks(out: &mut impl Write, tasks: &[Task], json: bool) -> eyre::Result<()> {
    let records: Vec<TaskRecord<'_>> = tasks.iter().map(TaskRecord::from).collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(
        out,
        "{:>6}  {:<10}  {:<9}  {:>8}  title",
        "id", "due_date", "completed", "category"
    )?;
    for record in &records {
        writeln!(
            out,
            "{:>6}  {:<10}  {:<9}  {:>8}  {}",
            record.id, record.due_date, record.completed, record.category, record.title
        )?;
    }
    Ok(())
}
