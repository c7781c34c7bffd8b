//! Geocoding service port
//!
//! Defines the interface for turning a free-text place into coordinates.
//! Each provider tier (Mappls, Nominatim) is one implementation.

use async_trait::async_trait;
use domain::{GeoLocation, Place};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a single geocoding provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place to the provider's best-match coordinate
    ///
    /// Alternatives beyond the first candidate are discarded by the
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ExternalService` on timeout, transport
    /// failure, non-success status, malformed payload, or no match.
    async fn geocode(&self, place: &Place) -> Result<GeoLocation, ApplicationError>;

    /// Short provider label for logs
    fn provider_name(&self) -> &'static str;
}
