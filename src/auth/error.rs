// Authentication and authorization error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::auth::models::Role;
use crate::response::ErrorEnvelope;

/// Authentication and authorization error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    // Authentication errors
    #[error("Access token required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("User {0} no longer exists")]
    UserNotFound(i32),

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    // Authorization errors
    /// No verified identity reached a guarded handler
    #[error("Authentication required")]
    NotAuthenticated,

    /// Verified identity whose role is outside the allow-list
    #[error("Insufficient permissions: role '{actual}' is not allowed")]
    InsufficientPermissions { actual: Role },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::MissingToken | AuthError::NotAuthenticated => {
                warn!("Unauthenticated request: {}", self)
            }
            AuthError::InvalidToken => warn!("Invalid token attempt"),
            AuthError::ExpiredToken => warn!("Expired token attempt"),
            AuthError::InvalidCredentials => warn!("Failed login attempt"),
            AuthError::EmailAlreadyExists => warn!("Registration with an existing email"),
            AuthError::UserNotFound(id) => warn!("Token subject {} has no user record", id),
            AuthError::InsufficientPermissions { actual } => {
                warn!("Authorization failed: role '{}' not permitted", actual)
            }
            AuthError::PasswordHashError(msg) => error!("Password hashing error: {}", msg),
            AuthError::TokenGenerationError(msg) => error!("Token generation error: {}", msg),
        }

        ErrorEnvelope::new(self.code(), self.client_message()).into_response_with(self.status_code())
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::PasswordHashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientPermissions { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Machine-readable code for the error envelope
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken | AuthError::NotAuthenticated => "UNAUTHORIZED",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::ExpiredToken => "TOKEN_EXPIRED",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::EmailAlreadyExists => "USER_EXISTS",
            AuthError::UserNotFound(_) => "NOT_FOUND",
            AuthError::InsufficientPermissions { .. } => "FORBIDDEN",
            AuthError::PasswordHashError(_) | AuthError::TokenGenerationError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Message safe to send to clients (no sensitive data)
    pub fn client_message(&self) -> String {
        match self {
            AuthError::UserNotFound(_) => "User not found".to_string(),
            AuthError::InsufficientPermissions { .. } => "Insufficient permissions".to_string(),
            AuthError::PasswordHashError(_) | AuthError::TokenGenerationError(_) => {
                "An internal server error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_are_distinguished() {
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::ExpiredToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::ExpiredToken.client_message(), "Token expired");
        assert_eq!(AuthError::InvalidToken.client_message(), "Invalid token");
        assert_eq!(AuthError::MissingToken.client_message(), "Access token required");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AuthError::PasswordHashError("salt string invalid".into());
        assert_eq!(err.client_message(), "An internal server error occurred");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_guard_failures() {
        let err = AuthError::InsufficientPermissions {
            actual: Role::Farmer,
        };
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.client_message(), "Insufficient permissions");
        assert_eq!(AuthError::NotAuthenticated.client_message(), "Authentication required");
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        let err = AuthError::EmailAlreadyExists;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "User already exists");
    }
}
