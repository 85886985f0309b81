//! Adapter implementations of the task board repository ports.

pub mod memory;
pub mod sqlite;
