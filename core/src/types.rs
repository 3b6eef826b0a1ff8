//! The todo record and its creation defaults.
//!
//! # Design
//! `Todo` is both the JSON body served by the HTTP layer and the row shape
//! read back from PostgreSQL, so one struct carries the serde and
//! `sqlx::FromRow` derives. Field names match the `todos` table columns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority assigned to every newly created todo. No operation changes it.
pub const DEFAULT_PRIORITY: i32 = 3;

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: i32,
}

impl Todo {
    /// Build a fresh record with a new v4 id and the creation defaults:
    /// no description, not completed, `DEFAULT_PRIORITY`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            completed: false,
            priority: DEFAULT_PRIORITY,
        }
    }
}
