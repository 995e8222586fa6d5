//! Taskboard: three-column task board core.
//!
//! This crate provides the domain model and orchestration logic for a task
//! board that partitions work into To Do, In Progress, and Completed
//! columns, backed by a pluggable task store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete store implementations (in-memory, `PostgreSQL`)
//! - **Services**: The board controller coordinating refreshes and mutations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use taskboard::adapters::memory::InMemoryTaskStore;
//! use taskboard::config::BoardConfig;
//! use taskboard::services::{BoardController, CreateTaskRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(InMemoryTaskStore::new());
//! let controller = BoardController::new(store, BoardConfig::default());
//!
//! controller
//!     .create(CreateTaskRequest::new("Write onboarding notes"))
//!     .await;
//!
//! let board = controller.snapshot();
//! assert_eq!(board.to_do().len(), 1);
//! assert!(board.in_progress().is_empty());
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
