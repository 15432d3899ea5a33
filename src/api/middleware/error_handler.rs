//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError, providing
//! consistent error response formatting across the API.
//!
//! # Status Code Mapping
//! - FieldViolations → 400 BAD_REQUEST with a full `reasons` map
//! - BadRequest → 400 BAD_REQUEST
//! - NotFound → 404 NOT_FOUND
//! - UniqueConflict → 409 CONFLICT with a single-field `reasons` map
//! - IdConflict → 409 CONFLICT with a `reasons` map keyed by `id`
//! - Database / Internal → 500 INTERNAL_SERVER_ERROR, generic message only
//! - ConnectionPool → 503 SERVICE_UNAVAILABLE

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            AppError::FieldViolations { violations } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_reasons("Bad Request", violations.clone()),
            ),
            AppError::UniqueConflict { field, message } => (
                StatusCode::CONFLICT,
                ErrorResponse::single_reason("Conflict", field, message),
            ),
            AppError::IdConflict { message } => (
                StatusCode::CONFLICT,
                ErrorResponse::single_reason("Conflict", "id", message),
            ),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, ErrorResponse::new(message)),
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An unexpected error occurred whilst processing the request"),
                )
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("Database connection unavailable"),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An unexpected error occurred whilst processing the request"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::FieldViolations { .. } => StatusCode::BAD_REQUEST,
        AppError::UniqueConflict { .. } => StatusCode::CONFLICT,
        AppError::IdConflict { .. } => StatusCode::CONFLICT,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE};

    #[test]
    fn test_field_violations_status_code() {
        let error = AppError::violation("name", "Name is required");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unique_conflict_status_code() {
        let error = AppError::unique_conflict(UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE);
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
    }

    #[test]
    fn test_id_conflict_status_code() {
        let error = AppError::IdConflict {
            message: "The User ID in the request body must match that of the User being updated"
                .to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::not_found("User", "id", 123);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_status_code() {
        let error = AppError::bad_request("Invalid User supplied in request body");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_status_code() {
        let error = AppError::Database {
            operation: "insert user".to_string(),
            source: anyhow::anyhow!("Connection failed"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_connection_pool_status_code() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("Pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_status_code() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("Unexpected error"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unique_conflict_response_status() {
        let error = AppError::unique_conflict(UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response_is_sanitized() {
        // The response must not expose the source error details
        let error = AppError::Internal {
            source: anyhow::anyhow!("secret connection string"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
