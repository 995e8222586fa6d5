//! Domain model for the task board.
//!
//! The board domain models validated task records, the derived three-way
//! board status, partitioning of full store listings, and the new-task
//! draft, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod draft;
mod error;
mod ids;
mod patch;
mod snapshot;
mod task;

pub use draft::NewTaskDraft;
pub use error::BoardDomainError;
pub use ids::{StageGroup, TaskId};
pub use patch::TaskPatch;
pub use snapshot::BoardSnapshot;
pub use task::{NewTask, PersistedTaskData, Task, TaskStatus, TaskTitle};
