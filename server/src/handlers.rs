//! One handler per todo operation.
//!
//! Bodies are taken as raw bytes and decoded here rather than through
//! axum's `Json` extractor, so a bad body is always a 400 whatever the
//! `Content-Type`. Responses still go out through `Json`, which serializes
//! into a buffer before the status is set.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use todo_core::Todo;
use uuid::Uuid;

use crate::error::ApiError;
use crate::SharedStore;

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("invalid request body: {e}")))
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("invalid todo id"))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input: CreateTodo = decode(&body)?;
    if input.title.is_empty() {
        return Err(ApiError::bad_request("title must not be empty"));
    }

    let todo = store.create(&input.title).await?;
    tracing::debug!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.list().await?))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id).await?))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input: UpdateTodo = decode(&body)?;
    let id = parse_id(&id)?;

    let todo = store.update(id, input.completed).await?;
    tracing::debug!(%id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    store.delete(id).await?;
    tracing::debug!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_requires_title() {
        let result: Result<CreateTodo, _> = decode(br#"{"completed":true}"#);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn create_todo_ignores_unknown_fields() {
        let input: CreateTodo = decode(br#"{"title":"Buy milk","priority":9}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
    }

    #[test]
    fn update_todo_requires_bool() {
        let result: Result<UpdateTodo, _> = decode(br#"{"completed":"yes"}"#);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn empty_body_is_bad_request() {
        let result: Result<UpdateTodo, _> = decode(b"");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn parse_id_accepts_canonical_uuid() {
        let id = parse_id("00000000-0000-0000-0000-000000000001").unwrap();
        assert_eq!(id.as_u128(), 1);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("not-a-uuid"), Err(ApiError::BadRequest(_))));
    }
}
