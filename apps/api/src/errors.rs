use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::session::StoreError;
use crate::upstream::UpstreamError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream call failed. The message is what callers see; the cause is
    /// only logged.
    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: UpstreamError,
    },

    /// The stored session changed underneath a request, e.g. a logout while the
    /// coach was replying.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn upstream(message: impl Into<String>, source: UpstreamError) -> Self {
        AppError::Upstream {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => {
                tracing::info!("{msg}");
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Upstream { message, source } => {
                tracing::warn!("{message}: {source}");
                // Flat body so relay failures match `{ "error": "<message>" }`.
                return (StatusCode::BAD_GATEWAY, Json(json!({ "error": message })))
                    .into_response();
            }
            AppError::Store(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_upstream_error_is_flat_502() {
        let err = AppError::upstream(
            "Failed to reach AWS coach endpoint",
            UpstreamError::Timeout(Duration::from_secs(55)),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Failed to reach AWS coach endpoint" }));
    }

    #[tokio::test]
    async fn test_not_found_uses_structured_body() {
        let response = AppError::NotFound("Job 99 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_conflict_is_409_with_code() {
        let response = AppError::Conflict("Session changed".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(body["error"]["message"], "Session changed");
    }
}
