//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Map artifact could not be produced
    #[error("Rendering failed: {0}")]
    Rendering(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("HTTP 503".to_string());
        assert_eq!(err.to_string(), "External service error: HTTP 503");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::InvalidPlace(String::new()));
        assert_eq!(err.to_string(), "Invalid place: ");
    }

    #[test]
    fn rendering_message() {
        let err = ApplicationError::Rendering("disk full".to_string());
        assert_eq!(err.to_string(), "Rendering failed: disk full");
    }
}
