//! Domain model for the task board.
//!
//! Categories group tasks; tasks carry a validated title, a due date, a
//! completion flag, and exactly one category reference. Infrastructure
//! concerns stay outside this boundary.

mod category;
mod error;
mod ids;
mod task;
mod title;

pub use category::{Category, CategoryName};
pub use error::TaskDomainError;
pub use ids::{CategoryId, TaskId};
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
