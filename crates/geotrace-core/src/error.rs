//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of GeoTrace.
///
/// This enum provides the error variants shared by the domain, service,
/// infrastructure, and presentation layers.
#[derive(Error, Debug)]
pub enum GeotraceError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error (malformed payload, bad address format, empty field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate username)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GeotraceError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::ExternalService { .. } => 502,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for GeotraceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // PostgreSQL unique violation
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GeotraceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `GeotraceError`.
    #[must_use]
    pub fn from_error(error: &GeotraceError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&GeotraceError> for ErrorResponse {
    fn from(error: &GeotraceError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(GeotraceError::not_found("User", 1).status_code(), 404);
        assert_eq!(GeotraceError::validation("bad address").status_code(), 400);
        assert_eq!(GeotraceError::conflict("duplicate").status_code(), 409);
        assert_eq!(
            GeotraceError::Database("db error".to_string()).status_code(),
            500
        );
        assert_eq!(GeotraceError::internal("oops").status_code(), 500);
        assert_eq!(
            GeotraceError::ExternalService {
                service: "ip-api".to_string(),
                message: "down".to_string(),
            }
            .status_code(),
            502
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GeotraceError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            GeotraceError::validation("bad input").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(GeotraceError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(
            GeotraceError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(GeotraceError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = GeotraceError::not_found("Location", "42");
        assert!(not_found.to_string().contains("Location"));

        let validation = GeotraceError::validation("invalid ip address");
        assert!(validation.to_string().contains("invalid ip address"));

        let conflict = GeotraceError::conflict("username taken");
        assert!(conflict.to_string().contains("username taken"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = GeotraceError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = GeotraceError::validation("bad input");
        let details = vec![FieldError {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
            code: "not_blank".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
