//! Ports through which the board core talks to external collaborators.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
