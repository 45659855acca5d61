// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent error format for JSON output
// - Never exposes internal implementation details
// - Logs errors for debugging

use crate::domain::DomainError;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Standard error response for command output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Record not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Favorites store failure (500)
    Database,

    /// Catalog API unreachable or misbehaving (502)
    ExternalService,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(DomainError::InvalidPage(page)) => Self::new(
                ErrorType::Validation,
                format!("Invalid page {}", page),
                Some("Pages start at 1".to_string()),
            ),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Network(_) | AppError::Http { .. } | AppError::Parse(_) => {
                log::warn!("Catalog error: {}", error);
                Self::new(
                    ErrorType::ExternalService,
                    "Catalog service error",
                    Some(error.to_string()),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
        assert!(!error.success);
    }

    #[test]
    fn test_invalid_page_is_validation() {
        let response = ErrorResponse::from_app_error(DomainError::InvalidPage(0).into());
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.message, "Invalid page 0");
    }

    #[test]
    fn test_catalog_errors_are_external() {
        for error in [
            AppError::Network("timed out".to_string()),
            AppError::Http { status: 500 },
            AppError::Parse("missing field `results`".to_string()),
        ] {
            let response = ErrorResponse::from_app_error(error);
            assert_eq!(response.error_type, ErrorType::ExternalService);
            assert!(response.details.is_some());
        }
    }

    #[test]
    fn test_domain_error_details() {
        let response = ErrorResponse::from_app_error(
            DomainError::InvariantViolation("Favorite id must be positive".to_string()).into(),
        );
        assert_eq!(response.error_type, ErrorType::DomainError);
        assert!(response.details.unwrap().contains("positive"));
    }

    #[test]
    fn test_serialization() {
        let json = ErrorResponse::from_app_error(AppError::NotFound).to_json();
        assert!(json.contains("\"not_found\""));
        assert!(json.contains("\"success\":false"));
    }

    #[test]
    fn test_pool_error_is_database() {
        let response = ErrorResponse::from_app_error(AppError::Pool("timed out".to_string()));
        assert_eq!(response.error_type, ErrorType::Database);
        assert!(response.details.is_none());
    }
}
