//! Error types for vCloud operations.
//!
//! This module provides the shared error type for vCloud compute operations. Collaborator
//! failures (inventory, detail and location lookups) are expressed with these variants and
//! travel unmodified out of listing calls.

use thiserror::Error;

/// Main error type for vCloud operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Remote vCloud service is unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Timeout waiting for service: {0}")]
    Timeout(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No known location matches a VDC reference
    #[error("No location found for resource: {0}")]
    LocationNotFound(String),

    /// A resource href could not be parsed
    #[error("Invalid href: {0}")]
    InvalidHref(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// External service error
    #[error("External service error: {service}: {message}")]
    ExternalServiceError {
        /// Service name that failed
        service: String,
        /// Error message
        message: String,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Specialized result type for vCloud operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::LocationNotFound(_) => "LOCATION_NOT_FOUND",
            Self::InvalidHref(_) => "INVALID_HREF",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ExternalServiceError { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::InternalError(_)
                | Self::ConfigError(_)
                | Self::LocationNotFound(_)
                | Self::ExternalServiceError { .. }
        )
    }

    /// Returns true if the failure came from a remote collaborator rather than local state.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_)
                | Self::HttpError(_)
                | Self::Timeout(_)
                | Self::NotFound(_)
                | Self::ExternalServiceError { .. }
        )
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidHref(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            Error::LocationNotFound("test".to_string()).error_code(),
            "LOCATION_NOT_FOUND"
        );
        assert_eq!(
            Error::InvalidHref("test".to_string()).error_code(),
            "INVALID_HREF"
        );
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::ValidationError("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            Error::ExternalServiceError {
                service: "test".to_string(),
                message: "msg".to_string()
            }
            .error_code(),
            "EXTERNAL_SERVICE_ERROR"
        );
        assert_eq!(
            Error::InternalError("test".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::LocationNotFound("https://vcloud/api/vdc/1".to_string());
        assert_eq!(
            err.to_string(),
            "No location found for resource: https://vcloud/api/vdc/1"
        );

        let err = Error::ExternalServiceError {
            service: "vdc".to_string(),
            message: "connection failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "External service error: vdc: connection failed"
        );
    }

    #[test]
    fn test_should_log() {
        assert!(Error::InternalError("test".to_string()).should_log());
        assert!(Error::ConfigError("test".to_string()).should_log());
        assert!(Error::LocationNotFound("test".to_string()).should_log());

        assert!(!Error::NotFound("test".to_string()).should_log());
        assert!(!Error::Timeout("test".to_string()).should_log());
    }

    #[test]
    fn test_is_remote() {
        assert!(Error::Timeout("vdc".to_string()).is_remote());
        assert!(Error::ServiceUnavailable("vdc".to_string()).is_remote());
        assert!(!Error::ConfigError("bad".to_string()).is_remote());
        assert!(!Error::LocationNotFound("vdc".to_string()).is_remote());
    }

    #[test]
    fn test_from_validation_errors() {
        let err: Error = validator::ValidationErrors::new().into();
        assert!(matches!(err, Error::ValidationError(_)));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let vcloud_err: Error = err.into();
        assert!(matches!(vcloud_err, Error::InvalidHref(_)));
    }
}
