//! Taskboard: a task-tracking web application.
//!
//! Users see outstanding and completed tasks, each assigned to a category,
//! and add new tasks through a form on the same page.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`SQLite`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Categories, tasks, the creation form, and task services
//! - [`web`]: Configuration, page rendering, and the HTTP route
//! - [`logging`]: Tracing subscriber initialisation

pub mod logging;
pub mod task;
pub mod web;
