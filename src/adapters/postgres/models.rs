//! Diesel row models for board task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Persona tag.
    pub persona: String,
    /// Workflow stage ordinal.
    pub stage_group: i32,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// The identifier comes from the table's sequence, so it is absent here;
/// timestamps are stamped by the store's clock at insert time.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Persona tag.
    pub persona: String,
    /// Workflow stage ordinal.
    pub stage_group: i32,
    /// Completion flag, `false` for freshly created tasks.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for partial task updates.
///
/// `None` fields are skipped by Diesel, leaving the stored column untouched;
/// `updated_at` is always stamped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement persona tag, if any.
    pub persona: Option<String>,
    /// Replacement stage ordinal, if any.
    pub stage_group: Option<i32>,
    /// Mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
