//! Domain model and persistence gateway for the todo service.
//!
//! # Overview
//! Defines the `Todo` record, the `TodoStore` trait the HTTP layer talks to,
//! and two implementations of it: `MemoryTodoStore` for tests and local runs,
//! and `PgTodoStore` over a `sqlx` PostgreSQL pool.
//!
//! # Design
//! - The store is transport-agnostic: it reports `NotFound` and `Storage`
//!   and leaves status codes to the server crate.
//! - The pool is injected at construction and shared by cloning the store.

pub mod error;
pub mod postgres;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use postgres::PgTodoStore;
pub use store::{MemoryTodoStore, TodoStore};
pub use types::{Todo, DEFAULT_PRIORITY};
