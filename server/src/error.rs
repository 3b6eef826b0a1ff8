//! HTTP error responses.
//!
//! Every handler failure ends up here as one of three variants, rendered as
//! a plain-text body with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_core::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body or path parameter.
    #[error("{0}")]
    BadRequest(String),

    #[error("todo not found")]
    NotFound,

    /// The store failed. The message is logged, not sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "storage failure");
                "internal server error".to_string()
            }
            other => {
                tracing::debug!(%status, error = %other, "rejected request");
                other.to_string()
            }
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn store_errors_map_to_statuses() {
        let not_found: ApiError = StoreError::NotFound(Uuid::nil()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let storage: ApiError = StoreError::storage("connection reset").into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn responses_are_plain_text() {
        let resp = ApiError::bad_request("invalid todo id").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let content_type = resp.headers()[axum::http::header::CONTENT_TYPE]
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
