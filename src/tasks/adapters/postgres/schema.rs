//! Diesel schema for owner-scoped task rows.

diesel::table! {
    /// Task records, one row per task, keyed by task identifier.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning identity; a plain identifier crossing the store boundary,
        /// not a foreign key into the credential store.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional due date without a time component.
        due_date -> Nullable<Date>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
