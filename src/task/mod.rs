//! Task board: categories, tasks, the creation form, and the services that
//! list and create tasks.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Form input and validation rules in [`form`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod form;
pub mod ports;
pub mod services;
