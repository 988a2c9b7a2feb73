// Error handling module for the Agri-Assist API
// Provides the application-wide error type and its HTTP envelope conversion

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::auth::AuthError;
use crate::response::ErrorEnvelope;

/// Main error type for the API
/// All handlers should return Result<T, ApiError>
///
/// Each variant maps to a specific HTTP status code and error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Field-level validation errors from the validator crate
    /// Maps to HTTP 400 Bad Request
    #[error("validation failed: {0}")]
    ValidationError(validator::ValidationErrors),

    /// Malformed or semantically invalid input
    /// Maps to HTTP 400 Bad Request
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    /// Maps to HTTP 404 Not Found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// No route matched the request path
    /// Maps to HTTP 404 Not Found
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// Route exists but not for this method
    /// Maps to HTTP 405 Method Not Allowed
    #[error("method not allowed: {method} {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Authentication and authorization failures
    /// Status is decided by the wrapped AuthError
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Declared route without an implementation yet
    /// Maps to HTTP 501 Not Implemented
    #[error("not implemented: {feature}")]
    NotImplemented { feature: &'static str },

    /// Third-party provider failure (weather data)
    /// Maps to HTTP 500 Internal Server Error, details are logged only
    #[error("{message}: {source_message}")]
    Upstream {
        message: String,
        source_message: String,
    },

    /// Internal server errors
    /// Maps to HTTP 500 Internal Server Error, details are logged only
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Auth(auth_error) = self {
            return auth_error.into_response();
        }

        let status = self.status_code();
        let envelope = self.to_envelope();
        envelope.into_response_with(status)
    }
}

impl ApiError {
    /// Build the failure envelope, logging at a level that matches severity:
    /// - debug!: expected client errors (validation, not found, placeholders)
    /// - error!: internal and upstream failures
    ///
    /// Internal details never reach the client.
    fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                ErrorEnvelope::new("VALIDATION_ERROR", "Validation failed")
                    .with_details(serde_json::to_value(errors).unwrap_or(json!({})))
            }
            ApiError::BadRequest(message) => {
                debug!("Bad request: {}", message);
                ErrorEnvelope::new("BAD_REQUEST", message.clone())
            }
            ApiError::NotFound { resource } => {
                debug!("Resource not found: {}", resource);
                ErrorEnvelope::new("NOT_FOUND", format!("{} not found", resource))
            }
            ApiError::RouteNotFound(path) => {
                debug!("No route for {}", path);
                ErrorEnvelope::new("NOT_FOUND", format!("Route not found - {}", path))
            }
            ApiError::MethodNotAllowed { method, path } => {
                debug!("Method {} not allowed on {}", method, path);
                ErrorEnvelope::new(
                    "METHOD_NOT_ALLOWED",
                    format!("Method {} not allowed on {}", method, path),
                )
            }
            ApiError::NotImplemented { feature } => {
                debug!("Placeholder route hit: {}", feature);
                ErrorEnvelope::new("NOT_IMPLEMENTED", "Feature coming soon")
                    .with_details(json!({ "feature": feature }))
            }
            ApiError::Upstream {
                message,
                source_message,
            } => {
                error!("Upstream failure: {} ({})", message, source_message);
                ErrorEnvelope::new("UPSTREAM_ERROR", message.clone())
            }
            ApiError::InternalError(internal_msg) => {
                error!("Internal error: {}", internal_msg);
                ErrorEnvelope::new("INTERNAL_ERROR", "An internal server error occurred")
            }
            ApiError::Auth(auth_error) => {
                warn!("Auth error rendered through ApiError: {}", auth_error);
                ErrorEnvelope::new(auth_error.code(), auth_error.client_message())
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Auth(auth_error) => auth_error.status_code(),
            ApiError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound {
            resource: resource.to_string(),
        }
    }
}

/// Convert validator errors to ApiError
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}

/// Malformed JSON bodies become 400 envelopes instead of plain-text rejections
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Handler for declared routes that have no implementation yet
pub async fn coming_soon(feature: &'static str) -> ApiError {
    ApiError::NotImplemented { feature }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("Loan").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotImplemented { feature: "loans.repayments" }.status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            ApiError::Auth(AuthError::InvalidToken).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Upstream {
                message: "Failed to get weather data".into(),
                source_message: "connection refused".into(),
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let envelope = ApiError::InternalError("lock poisoned at store.rs:42".into()).to_envelope();
        assert_eq!(envelope.error.message, "An internal server error occurred");
        assert!(envelope.error.details.is_none());
    }

    #[test]
    fn test_not_found_message() {
        let envelope = ApiError::not_found("Scheme").to_envelope();
        assert_eq!(envelope.error.message, "Scheme not found");
        assert_eq!(envelope.error.code, "NOT_FOUND");
    }
}
