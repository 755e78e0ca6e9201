//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with project and assignee references.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project (foreign key, delete restricted).
        project_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Assigned developer (foreign key, delete restricted).
        assignee_id -> Uuid,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional estimated complexity (1..=5).
        estimated_complexity -> Nullable<SmallInt>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Completion date, present exactly for completed tasks.
        completion_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
