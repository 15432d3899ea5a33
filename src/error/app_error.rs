use std::collections::BTreeMap;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::validators::{
    UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE, UNIQUE_PHONE_FIELD, UNIQUE_PHONE_MESSAGE,
    UNIQUE_REVIEW_FIELD, UNIQUE_REVIEW_MESSAGE,
};

/// Application-wide error type that represents all possible errors in the system.
///
/// Validation and conflict variants carry the structured field data the API
/// layer needs to build `reasons` maps, so no handler has to inspect error
/// messages to decide on a response shape.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// One or more field constraint violations, keyed by JSON field name
    #[error("Validation failed for {} field(s)", violations.len())]
    FieldViolations {
        violations: BTreeMap<String, String>,
    },

    /// Uniqueness conflict on a single named field
    #[error("Conflict on {field}: {message}")]
    UniqueConflict { field: String, message: String },

    /// Path/body id mismatch on update
    #[error("{message}")]
    IdConflict { message: String },

    /// Resource not found
    #[error("{message}")]
    NotFound { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Create a bad request error
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not-found error with the standard message wording
    pub fn not_found<V: std::fmt::Display>(entity: &str, field: &str, value: V) -> Self {
        AppError::NotFound {
            message: format!("No {} with the {} {} was found!", entity, field, value),
        }
    }

    /// Create a single-field validation failure
    pub fn violation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        let mut violations = BTreeMap::new();
        violations.insert(field.into(), message.into());
        AppError::FieldViolations { violations }
    }

    /// Create a uniqueness conflict on a single field
    pub fn unique_conflict<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        AppError::UniqueConflict {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    /// Converts diesel errors to structured variants.
    ///
    /// Unique-index violations are mapped onto the same conflict responses the
    /// validators produce, so the database-level backstop for the (inherently
    /// racy) application-level uniqueness check surfaces as a 409 rather than
    /// a 500.
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => AppError::NotFound {
                message: "The requested resource was not found".to_string(),
            },
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                match info.constraint_name() {
                    Some("users_email_key") => {
                        AppError::unique_conflict(UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE)
                    }
                    Some("restaurants_phone_number_key") => {
                        AppError::unique_conflict(UNIQUE_PHONE_FIELD, UNIQUE_PHONE_MESSAGE)
                    }
                    Some("reviews_user_id_restaurant_id_key") => {
                        AppError::unique_conflict(UNIQUE_REVIEW_FIELD, UNIQUE_REVIEW_MESSAGE)
                    }
                    _ => AppError::Database {
                        operation: "insert or update".to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {}",
                            info.message()
                        )),
                    },
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                AppError::BadRequest {
                    message: format!("Invalid reference: {}", info.message()),
                }
            }
            other => AppError::Database {
                operation: "database operation".to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Mock database error information for testing
    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_not_found_message_wording() {
        let error = AppError::not_found("User", "id", 42);
        assert_eq!(
            error.to_string(),
            "No User with the id 42 was found!"
        );
    }

    #[test]
    fn test_violation_builds_single_entry_map() {
        let error = AppError::violation("name", "Name is required");
        match error {
            AppError::FieldViolations { violations } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations["name"], "Name is required");
            }
            _ => panic!("Expected FieldViolations"),
        }
    }

    #[test]
    fn test_convert_diesel_not_found() {
        let result = AppError::from(DieselError::NotFound);
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn test_convert_unique_violation_email_constraint() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"users_email_key\""
                .to_string(),
            constraint_name: Some("users_email_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match AppError::from(error) {
            AppError::UniqueConflict { field, message } => {
                assert_eq!(field, "email");
                assert!(message.contains("already used"));
            }
            other => panic!("Expected UniqueConflict, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_unique_violation_review_constraint() {
        let info = MockDatabaseErrorInfo {
            message:
                "duplicate key value violates unique constraint \"reviews_user_id_restaurant_id_key\""
                    .to_string(),
            constraint_name: Some("reviews_user_id_restaurant_id_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match AppError::from(error) {
            AppError::UniqueConflict { field, message } => {
                assert_eq!(field, "review");
                assert!(message.contains("already exists"));
            }
            other => panic!("Expected UniqueConflict, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_unique_violation_unknown_constraint() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"widgets_code_key\""
                .to_string(),
            constraint_name: Some("widgets_code_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        assert!(matches!(AppError::from(error), AppError::Database { .. }));
    }

    #[test]
    fn test_convert_foreign_key_violation() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"reviews\" violates foreign key constraint \"reviews_user_id_fkey\""
                .to_string(),
            constraint_name: Some("reviews_user_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));

        match AppError::from(error) {
            AppError::BadRequest { message } => {
                assert!(message.contains("Invalid reference"));
            }
            other => panic!("Expected BadRequest, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_other_diesel_error() {
        let result = AppError::from(DieselError::RollbackTransaction);
        assert!(matches!(result, AppError::Database { .. }));
    }
}
