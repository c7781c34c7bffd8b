//! Geocoding provider trait

use async_trait::async_trait;
use domain::GeoLocation;

use crate::GeocodingError;

/// Trait for geocoding providers
///
/// Implemented by every geocoding backend (Mappls, Nominatim)
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve free text to the provider's best-match coordinate
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, malformed
    /// payload, or when the provider has no match.
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError>;

    /// Get the provider name (e.g., "mappls", "nominatim")
    fn provider_name(&self) -> &'static str;
}
