//! API error types with IntoResponse
//!
//! Every error renders as `{success: false, error: <status>, message: <text>}`.
//! Details are logged, never returned to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::ValidationError;

use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or unknown category (400)
    BadRequest { reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Body could not be parsed or the write was rejected (422)
    Unprocessable { reason: String },

    /// Store failure (500, logged)
    Internal(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal(_) => "internal server error",
        }
    }

    /// Route fallback for paths that match nothing.
    pub fn unknown_route(path: &str) -> Self {
        Self::NotFound {
            resource: "route",
            id: path.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "bad request"),
            Self::NotFound { resource, id } => tracing::debug!(resource, %id, "not found"),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::debug!(%reason, "unprocessable"),
            Self::Internal(e) => tracing::error!("Store error: {}", e),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_of(ApiError::NotFound {
            resource: "question",
            id: "1000".into(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let (status, body) = body_of(ApiError::BadRequest {
            reason: "no such category".into(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "bad request");
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::from(ValidationError::Empty { field: "answer" });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let (status, body) = body_of(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn store_errors_map_by_kind() {
        let err = ApiError::from(StoreError::NotFound {
            resource: "question",
            id: "7".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
    }
}
