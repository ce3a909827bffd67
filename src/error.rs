// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::DbError;
use crate::validation::ValidationFailure;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        details: Vec<String>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 502 Bad Gateway (identity provider issues)
    BadGateway(String),

    // 500 Internal Server Error
    InternalServerError {
        message: String,
        details: String,
    },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::BadGateway(msg) => msg,
            ApiError::InternalServerError { message, .. } => message,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError { message, details } if !details.is_empty() => {
                json!({ "message": message, "details": details })
            }
            ApiError::InternalServerError { message, details } => {
                json!({ "message": message, "details": details })
            }
            _ => json!({ "message": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::ValidationError {
            message: failure.message,
            details: failure.details,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // Log the real error; the body carries only a short diagnostic
        tracing::error!("database error: {}", err);
        ApiError::internal("Database operation failed", err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!("identity provider error: {}", err);
        ApiError::bad_gateway("Identity provider request failed")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_outcomes_to_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::bad_gateway("x").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::internal("x", "y").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn plain_errors_expose_only_a_message() {
        let body = ApiError::not_found("Client not found").to_json();
        assert_eq!(body, serde_json::json!({ "message": "Client not found" }));
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let err = ApiError::ValidationError {
            message: "Missing required fields".into(),
            details: vec!["name: required".into()],
        };
        let body = err.to_json();
        assert_eq!(body["message"], "Missing required fields");
        assert_eq!(body["details"][0], "name: required");
    }

    #[test]
    fn internal_errors_surface_diagnostic_details() {
        let body = ApiError::internal("Database operation failed", "pool closed").to_json();
        assert_eq!(body["details"], "pool closed");
    }
}
