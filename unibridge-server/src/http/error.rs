//! API error types with IntoResponse
//!
//! Every handler returns `Result<_, ApiError>` (or one of its alternate
//! renderings). Status mapping lives here and nowhere else:
//! validation → 400, not found → 404, store failure → 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store failure (500, logged); `message` is what the caller sees
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Translate a store error, keeping not-found distinct from failure.
    pub fn from_db(err: DbError, message: &'static str) -> Self {
        match err {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message. Logs store failures as a side effect so each
    /// rendering records them exactly once.
    fn into_message(self) -> (StatusCode, String) {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "Not found");
                format!("{} '{}' not found", resource, id)
            }
            Self::Database { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_owned()
            }
        };
        (status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.into_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Attach the caller-facing message to a store result.
pub trait DbResultExt<T> {
    fn or_api_error(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> DbResultExt<T> for Result<T, DbError> {
    fn or_api_error(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_db(e, message))
    }
}

/// `ApiError` rendered as a plain-text body (faculty routes).
#[derive(Debug)]
pub struct TextError(pub ApiError);

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        self.0.into_message().into_response()
    }
}

impl From<ApiError> for TextError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

impl From<ValidationError> for TextError {
    fn from(e: ValidationError) -> Self {
        Self(ApiError::Validation(e))
    }
}

/// `ApiError` rendered as `{ "ok": false, "error": ... }` (health route).
#[derive(Debug)]
pub struct HealthError(pub ApiError);

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.into_message();
        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}

impl From<ApiError> for HealthError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "fName" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn db_not_found_becomes_404() {
        let err = ApiError::from_db(
            DbError::NotFound {
                resource: "Student",
                id: "42".into(),
            },
            "Database delete error",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Student '42' not found" })
        );
    }

    #[tokio::test]
    async fn db_failure_hides_details() {
        let err = ApiError::from_db(
            DbError::Constraint("duplicate key 'PRIMARY'".into()),
            "Database insert error",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Database insert error" }));
        assert!(!body.to_string().contains("PRIMARY"));
    }

    #[tokio::test]
    async fn text_error_is_plain() {
        let err = TextError(ApiError::from_db(DbError::Unavailable, "Error adding faculty"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Error adding faculty");
    }

    #[tokio::test]
    async fn health_error_reports_not_ok() {
        let err = HealthError(ApiError::from_db(DbError::Unavailable, "Database unavailable"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Database unavailable" })
        );
    }
}
