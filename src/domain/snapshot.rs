//! Partitioned view of the full task collection.

use super::{Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// The three disjoint, exhaustive task partitions shown on the board.
///
/// A snapshot is a pure function of one full store listing; it is rebuilt
/// wholesale on every refresh and never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    to_do: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl BoardSnapshot {
    /// Partitions one full store listing into the three board columns.
    ///
    /// The active listing is split locally: stage group 1 goes to To Do,
    /// anything above goes to In Progress. The completed listing is taken
    /// verbatim. Routing goes through [`Task::status`], so a task the store
    /// mislabels as active while flagged completed still lands in the
    /// Completed partition rather than leaking into two columns.
    #[must_use]
    pub fn partition(active: Vec<Task>, completed: Vec<Task>) -> Self {
        let mut snapshot = Self {
            to_do: Vec::new(),
            in_progress: Vec::new(),
            completed,
        };
        for task in active {
            match task.status() {
                TaskStatus::ToDo => snapshot.to_do.push(task),
                TaskStatus::InProgress { .. } => snapshot.in_progress.push(task),
                TaskStatus::Completed => snapshot.completed.push(task),
            }
        }
        snapshot
    }

    /// Returns the To Do partition.
    #[must_use]
    pub fn to_do(&self) -> &[Task] {
        &self.to_do
    }

    /// Returns the In Progress partition.
    #[must_use]
    pub fn in_progress(&self) -> &[Task] {
        &self.in_progress
    }

    /// Returns the Completed partition.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the number of tasks across all three partitions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.to_do.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns `true` when no partition holds a task.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Looks a task up by identifier across all three partitions.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.to_do
            .iter()
            .chain(&self.in_progress)
            .chain(&self.completed)
            .find(|task| task.id() == id)
    }
}
