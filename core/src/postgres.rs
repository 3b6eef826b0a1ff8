//! PostgreSQL implementation of the persistence gateway.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS todos (
//!     id UUID PRIMARY KEY,
//!     title TEXT NOT NULL,
//!     description TEXT,
//!     completed BOOLEAN NOT NULL DEFAULT FALSE,
//!     priority INTEGER NOT NULL
//! );
//! ```
//!
//! Migrations belong to whoever owns the database; `ensure_schema` only
//! exists so a fresh development database can be bootstrapped.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;
use crate::types::Todo;

const TODO_COLUMNS: &str = "id, title, description, completed, priority";

/// `TodoStore` backed by a shared `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Open a pool against `database_url` and check that the database
    /// answers before returning.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::storage(format!("failed to connect: {e}")))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| StoreError::storage(format!("database ping failed: {e}")))?;

        tracing::info!(max_connections, "postgres pool established");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `todos` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                completed BOOLEAN NOT NULL DEFAULT FALSE,
                priority INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::storage(format!("failed to create schema: {e}")))?;

        Ok(())
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn create(&self, title: &str) -> StoreResult<Todo> {
        let todo = Todo::new(title);

        let created = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos ({TODO_COLUMNS}) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos"))
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Todo> {
        sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: Uuid, completed: bool) -> StoreResult<Todo> {
        // Single statement: no window between reading and writing the row.
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET completed = $2 WHERE id = $1 RETURNING {TODO_COLUMNS}"
        ))
        .bind(id)
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
