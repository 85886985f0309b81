//! Task creation form: raw input, per-field rules, and collected errors.
//!
//! Validation is a pure function over the submitted values and the known
//! categories. It never touches the datastore; persisting the resulting
//! [`NewTask`](crate::task::domain::NewTask) is a separate step owned by the
//! task board service.

mod errors;
mod input;
pub mod rules;
mod state;

pub use errors::{FieldError, FormErrors, TaskField};
pub use input::TaskFormInput;
pub use rules::validate_task_form;
pub use state::TaskFormState;
