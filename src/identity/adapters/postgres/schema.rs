//! Diesel schema for document-style account storage.

diesel::table! {
    /// Account records keyed by user identifier.
    accounts (id) {
        /// User identifier.
        id -> Uuid,
        /// Username, extracted from the document for unique lookup.
        #[max_length = 64]
        username -> Varchar,
        /// Email address, extracted from the document for unique lookup.
        #[max_length = 255]
        email -> Varchar,
        /// Identity document including the password hash.
        document -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
