//! Raw task form input as submitted by a client.

use serde::{Deserialize, Serialize};

/// Submitted task form values.
///
/// Every field is optional and untyped so that malformed submissions can be
/// reported field by field and echoed back to the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFormInput {
    /// Submitted title.
    #[serde(default)]
    pub title: Option<String>,
    /// Submitted due date, expected as `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Submitted completion flag; absent means not completed.
    #[serde(default)]
    pub completed: Option<String>,
    /// Submitted category identifier.
    #[serde(default)]
    pub category: Option<String>,
}

impl TaskFormInput {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title value.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the due date value.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the completion flag value.
    #[must_use]
    pub fn with_completed(mut self, completed: impl Into<String>) -> Self {
        self.completed = Some(completed.into());
        self
    }

    /// Sets the category value.
    #[must_use]
    pub fn with_category(mut self, category: impl ToString) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// Collects submitted `name=value` pairs. Unknown names are ignored and a
/// repeated name keeps its last value, so a hidden `completed=false` followed
/// by a checked `completed=on` reads as checked.
impl<K, V> FromIterator<(K, V)> for TaskFormInput
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut input = Self::new();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "title" => &mut input.title,
                "due_date" => &mut input.due_date,
                "completed" => &mut input.completed,
                "category" => &mut input.category,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        input
    }
}
