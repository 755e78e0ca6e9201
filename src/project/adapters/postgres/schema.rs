//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Client the project is delivered for.
        #[max_length = 255]
        client_name -> Varchar,
        /// Project start date.
        start_date -> Date,
        /// Optional project end date.
        end_date -> Nullable<Date>,
        /// Free-form project status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
