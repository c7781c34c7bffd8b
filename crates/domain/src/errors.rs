//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Place label was empty after trimming
    #[error("Invalid place: {0}")]
    InvalidPlace(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Provider returned a distance or duration that cannot be a route metric
    #[error("Invalid route metric {name}: {value}")]
    InvalidRouteMetric {
        /// Which metric was rejected ("distance" or "duration")
        name: &'static str,
        /// The rejected raw value
        value: f64,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid route metric error
    #[must_use]
    pub const fn invalid_metric(name: &'static str, value: f64) -> Self {
        Self::InvalidRouteMetric { name, value }
    }
}
