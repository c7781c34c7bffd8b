//! Routing error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// Routing service answered with a non-success status
    #[error("Routing request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// Response carried no route
    #[error("No route in response")]
    NoRoute,

    /// Route metrics were negative or not finite
    #[error("Invalid route: {0}")]
    InvalidRoute(#[from] DomainError),

    /// Request timeout
    #[error("Routing request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Provider is missing required configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RoutingError {
    /// Map a transport error from reqwest
    ///
    /// The request URL is stripped; MapmyIndia carries its key in the path.
    pub(crate) fn from_transport(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(e.without_url().to_string())
        }
    }

    /// Map a response body decoding error from reqwest, URL stripped
    pub(crate) fn from_decode(e: reqwest::Error) -> Self {
        Self::ParseError(e.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RoutingError::NoRoute.to_string(), "No route in response");

        let err = RoutingError::Timeout { timeout_secs: 5 };
        assert!(err.to_string().contains("5 seconds"));

        let err = RoutingError::from(DomainError::invalid_metric("distance", -1.0));
        assert_eq!(err.to_string(), "Invalid route: Invalid route metric distance: -1");
    }
}
