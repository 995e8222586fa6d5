//! `PostgreSQL` store adapter.

mod models;
mod repository;
mod schema;

pub use repository::{BoardPgPool, PostgresTaskStore};
