//! HTTP surface of the todo service.
//!
//! # Design
//! `app` wires the five handlers onto an axum `Router` whose only state is
//! the shared `TodoStore`. The binary hands it a `PgTodoStore`; tests hand
//! it a `MemoryTodoStore` or a failing double.

pub mod config;
pub mod error;
pub mod handlers;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use todo_core::TodoStore;

use crate::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

pub use config::Config;
pub use error::ApiError;

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

/// Serve until the listener fails.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(
    listener: TcpListener,
    store: SharedStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
