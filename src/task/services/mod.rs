//! Application services for the task board.

mod admin;
mod board;

pub use admin::{RecordBrowser, RecordBrowserError};
pub use board::{CreateOutcome, TaskBoard, TaskBoardError, TaskBoardResult, TaskBoardService};
