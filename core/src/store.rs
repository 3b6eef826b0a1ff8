//! The persistence gateway and its in-memory implementation.
//!
//! # Design
//! `TodoStore` is the only seam between the HTTP handlers and the database.
//! It is object safe (via `async_trait`) so the server can hold an
//! `Arc<dyn TodoStore>` and tests can swap in `MemoryTodoStore` or a
//! failing double without a database.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::types::Todo;

/// Async CRUD operations over todo records.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a new todo with the given title and the creation defaults.
    async fn create(&self, title: &str) -> StoreResult<Todo>;

    /// Every stored todo. Order is whatever the store yields.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// The todo with `id`, or `StoreError::NotFound`.
    async fn get(&self, id: Uuid) -> StoreResult<Todo>;

    /// Set `completed` on the todo with `id`, leaving every other field as
    /// it was. Returns the stored record after the change.
    async fn update(&self, id: Uuid, completed: bool) -> StoreResult<Todo>;

    /// Remove the todo with `id`. Succeeds whether or not it existed.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}

/// `TodoStore` backed by a `HashMap` behind a tokio `RwLock`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, title: &str) -> StoreResult<Todo> {
        let todo = Todo::new(title);
        self.todos.write().await.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> StoreResult<Todo> {
        self.todos
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: Uuid, completed: bool) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.completed = completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.todos.write().await.remove(&id);
        Ok(())
    }
}
