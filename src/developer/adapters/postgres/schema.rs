//! Diesel schema for developer persistence.

diesel::table! {
    /// Developer records.
    developers (id) {
        /// Developer identifier.
        id -> Uuid,
        /// First name.
        #[max_length = 255]
        first_name -> Varchar,
        /// Last name.
        #[max_length = 255]
        last_name -> Varchar,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
        /// Whether the developer may be assigned new tasks.
        active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
