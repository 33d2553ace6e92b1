use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the signup/login handlers. Every variant is rendered
/// as a JSON `{"error": ...}` body; the 5xx variants log the underlying
/// cause and answer with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required.")]
    MissingFields,

    /// Duplicate username or email. The message deliberately does not say
    /// which column collided.
    #[error("Username or email already exists.")]
    Conflict,

    /// Unknown username or wrong password, indistinguishable by design.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::Conflict;
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFields | ApiError::Conflict => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error.".to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error.".to_string())
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
