//! Per-field validation rules for the task form.
//!
//! Each rule is a pure function over one raw value. The composite
//! [`validate_task_form`] runs every rule and collects all failures instead
//! of stopping at the first.

use super::{FieldError, FormErrors, TaskField, TaskFormInput};
use crate::task::domain::{Category, CategoryId, NewTask, TaskDomainError, TaskTitle};
use chrono::{Datelike, NaiveDate};

/// Accepted date format (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years a due date may fall in. Wider or signed years would break the
/// lexical ordering of dates stored as text.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Values treated as an unchecked box, compared case-insensitively.
const FALSE_VALUES: [&str; 4] = ["", "false", "off", "0"];

/// Validates the task title.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when the title is absent or blank, and
/// [`FieldError::TooLong`] when it exceeds [`TaskTitle::MAX_LENGTH`].
pub fn validate_title(raw: Option<&str>) -> Result<TaskTitle, FieldError> {
    TaskTitle::new(raw.unwrap_or_default()).map_err(|err| match err {
        TaskDomainError::TitleTooLong { length, max } => FieldError::TooLong { max, length },
        _ => FieldError::Required,
    })
}

/// Validates the due date.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when the value is absent or blank, and
/// [`FieldError::InvalidDate`] when it is not a `YYYY-MM-DD` calendar date
/// with a year between 1 and 9999.
pub fn validate_due_date(raw: Option<&str>) -> Result<NaiveDate, FieldError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| YEAR_RANGE.contains(&date.year()))
        .ok_or(FieldError::InvalidDate)
}

/// Validates the category reference against the known categories.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when the value is absent or blank, and
/// [`FieldError::InvalidChoice`] when it is not the identifier of a known
/// category.
pub fn validate_category(
    raw: Option<&str>,
    categories: &[Category],
) -> Result<CategoryId, FieldError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let requested = value
        .parse::<i64>()
        .map_err(|_| FieldError::InvalidChoice)?;
    categories
        .iter()
        .map(Category::id)
        .find(|id| id.value() == requested)
        .ok_or(FieldError::InvalidChoice)
}

/// Coerces the completion flag. Absent and false-like values mean `false`.
#[must_use]
pub fn parse_completed(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| {
        !FALSE_VALUES
            .iter()
            .any(|falsy| value.eq_ignore_ascii_case(falsy))
    })
}

/// Validates a whole submission.
///
/// # Errors
///
/// Returns every field error found, keyed by field, when any rule fails.
pub fn validate_task_form(
    input: &TaskFormInput,
    categories: &[Category],
) -> Result<NewTask, FormErrors> {
    let mut errors = FormErrors::new();

    let title = validate_title(input.title.as_deref())
        .map_err(|err| errors.add(TaskField::Title, err))
        .ok();
    let due_date = validate_due_date(input.due_date.as_deref())
        .map_err(|err| errors.add(TaskField::DueDate, err))
        .ok();
    let category_id = validate_category(input.category.as_deref(), categories)
        .map_err(|err| errors.add(TaskField::Category, err))
        .ok();
    let completed = parse_completed(input.completed.as_deref());

    match (title, due_date, category_id) {
        (Some(valid_title), Some(valid_due_date), Some(valid_category)) => {
            Ok(NewTask::new(valid_title, valid_due_date, valid_category).with_completed(completed))
        }
        _ => Err(errors),
    }
}
