//! Diesel schema for board task persistence.

diesel::table! {
    /// Task records backing the board.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Task title, the key for bulk completion.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Persona tag.
        #[max_length = 255]
        persona -> Varchar,
        /// Workflow stage ordinal. Named `stage_group` because `group` is a
        /// reserved word in SQL.
        stage_group -> Integer,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
