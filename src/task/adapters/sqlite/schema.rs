//! Diesel schema for task board persistence.

diesel::table! {
    /// Task categories.
    categories (id) {
        /// Category identifier.
        id -> BigInt,
        /// Category label.
        name -> Text,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> BigInt,
        /// Task title, at most 100 characters.
        title -> Text,
        /// Calendar date the task is due.
        due_date -> Date,
        /// Completion flag.
        completed -> Bool,
        /// Owning category.
        category_id -> BigInt,
    }
}

diesel::joinable!(tasks -> categories (category_id));
diesel::allow_tables_to_appear_in_same_query!(categories, tasks);
