/// Unified Error Handling Module
///
/// This module provides the error types for the whole application:
/// 1. Domain-specific error enums (authentication, configuration)
/// 2. A unified `AppError` for control flow with `?`
/// 3. HTTP response mapping with structured error bodies
/// 4. Structured error logging before a response is emitted

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::error::Error as StdError;
use std::fmt;

/// Authentication and authorization failures.
///
/// Every credential operation resolves bad input or bad state to exactly
/// one of these variants; token-parsing internals are never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with an email that already has a user.
    DuplicateUser,
    /// Login with an unknown email or a wrong password.
    InvalidCredentials,
    /// Refresh token failed signature, shape, or expiry checks.
    InvalidRefreshToken,
    /// Refresh token verified but is no longer the current one for its user.
    RevokedRefreshToken,
    /// Token subject no longer resolves to a stored user.
    UserNotFound,
    /// Access token missing, invalid, or not tied to a stored user.
    Unauthenticated,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateUser => write!(f, "User with this email already exists"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::InvalidRefreshToken => write!(f, "Invalid refresh token"),
            AuthError::RevokedRefreshToken => write!(f, "Refresh token has been revoked"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::Unauthenticated => write!(f, "Unauthorized"),
        }
    }
}

impl StdError for AuthError {}

/// Configuration errors, fatal at startup
#[derive(Debug)]
pub enum ConfigError {
    MissingRequired(String),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingRequired(msg) => write!(f, "Missing required config: {}", msg),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl StdError for ConfigError {}

/// Central error type that all application errors map to
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    Config(ConfigError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for AppError {}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Auth(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

// ============================================================================
// HTTP RESPONSE MAPPING
// ============================================================================

/// Error response structure for HTTP responses
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for client-side handling
    pub code: String,
    /// HTTP status code
    pub status: u16,
    /// Timestamp when error occurred
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_id: String, message: String, code: String, status: u16) -> Self {
        Self {
            error_id,
            message,
            code,
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl AppError {
    fn status_code_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            // Duplicate registration is the caller's mistake, not an auth failure
            AppError::Auth(AuthError::DuplicateUser) => {
                (StatusCode::BAD_REQUEST, "DUPLICATE_USER")
            }
            AppError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
            }
            AppError::Auth(AuthError::InvalidRefreshToken) => {
                (StatusCode::UNAUTHORIZED, "INVALID_REFRESH_TOKEN")
            }
            AppError::Auth(AuthError::RevokedRefreshToken) => {
                (StatusCode::UNAUTHORIZED, "REVOKED_REFRESH_TOKEN")
            }
            AppError::Auth(AuthError::UserNotFound) => {
                (StatusCode::UNAUTHORIZED, "USER_NOT_FOUND")
            }
            AppError::Auth(AuthError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn log_error(&self, request_id: &str) {
        match self {
            AppError::Auth(e) => {
                tracing::warn!(
                    request_id = request_id,
                    error = %e,
                    "Authentication error"
                );
            }
            AppError::Config(e) => {
                tracing::error!(
                    request_id = request_id,
                    error = %e,
                    "Configuration error"
                );
            }
            AppError::Internal(msg) => {
                tracing::error!(
                    request_id = request_id,
                    error = %msg,
                    "Internal error"
                );
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Auth(e) => e.to_string(),
            // Never leak configuration or internal details to clients
            AppError::Config(_) => "Server configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.log_error(&request_id);

        let (status, code) = self.status_code_and_label();
        let body = ErrorResponse::new(
            request_id,
            self.public_message(),
            code.to_string(),
            status.as_u16(),
        );

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.status_code_and_label().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_user_maps_to_400() {
        let err = AppError::Auth(AuthError::DuplicateUser);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_failures_map_to_401() {
        for auth_err in [
            AuthError::InvalidCredentials,
            AuthError::InvalidRefreshToken,
            AuthError::RevokedRefreshToken,
            AuthError::UserNotFound,
            AuthError::Unauthenticated,
        ] {
            let err = AppError::Auth(auth_err);
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let err = AppError::Internal("bcrypt exploded".to_string());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_auth_error_conversion() {
        let app_err: AppError = AuthError::RevokedRefreshToken.into();
        match app_err {
            AppError::Auth(AuthError::RevokedRefreshToken) => (),
            _ => panic!("Expected RevokedRefreshToken"),
        }
    }

    #[test]
    fn test_error_response_creation() {
        let response = ErrorResponse::new(
            "test-123".to_string(),
            "Test error".to_string(),
            "TEST_ERROR".to_string(),
            400,
        );

        assert_eq!(response.error_id, "test-123");
        assert_eq!(response.code, "TEST_ERROR");
        assert_eq!(response.status, 400);
    }
}
