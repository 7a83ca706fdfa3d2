//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database errors**: any sqlx::Error from database operations
/// - **Validation errors**: invalid request data (bad amounts, blank fields)
/// - **Resource errors**: referenced user/account not found
/// - **Conflict errors**: uniqueness violations (email, owned accounts)
/// - **Credential errors**: failed login
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Wraps any sqlx::Error via `#[from]`. Details are hidden from clients.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request. The String says what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Account lacks the funds for a withdrawal or transfer.
    ///
    /// Returns HTTP 400 Bad Request. The message distinguishes plain
    /// withdrawals ("Insufficient balance") from transfers
    /// ("Insufficient balance in source account").
    #[error("{0}")]
    InsufficientBalance(&'static str),

    /// A referenced entity does not exist.
    ///
    /// Returns HTTP 404 Not Found. The message names the entity
    /// ("User not found", "Source account not found", ...).
    #[error("{0}")]
    NotFound(&'static str),

    /// A uniqueness rule was violated.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("{0}")]
    Conflict(&'static str),

    /// Login failed.
    ///
    /// Returns HTTP 401 Unauthorized. The message is identical for unknown
    /// email and wrong password, so callers cannot tell which check failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account-number generation ran out of attempts.
    ///
    /// Returns HTTP 500. With 48 bits of randomness per candidate this
    /// only happens if something is badly wrong.
    #[error("Could not allocate a unique account number")]
    AccountNumberExhausted,
}

/// Convert AppError into an HTTP response.
///
/// Allows handlers to return `Result<T, AppError>` and have errors
/// automatically converted into proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::InsufficientBalance(msg) => (
                StatusCode::BAD_REQUEST,
                "insufficient_balance",
                msg.to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.to_string()),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::Database(_) | AppError::AccountNumberExhausted => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
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

    #[test]
    fn credential_errors_share_one_message() {
        // Both failed-login paths must be indistinguishable to the caller.
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn database_errors_hide_details() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (
                AppError::InvalidRequest("bad".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::InsufficientBalance("Insufficient balance").into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("Account not found").into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Conflict("Email already registered").into_response(),
                StatusCode::CONFLICT,
            ),
            (
                AppError::InvalidCredentials.into_response(),
                StatusCode::UNAUTHORIZED,
            ),
        ];
        for (response, want) in cases {
            assert_eq!(response.status(), want);
        }
    }
}
