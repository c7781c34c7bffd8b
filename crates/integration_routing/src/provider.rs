//! Routing provider trait

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};

use crate::RoutingError;

/// Trait for routing providers
///
/// Implemented by every routing backend (MapmyIndia, openrouteservice)
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute the first route from `source` to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, a payload
    /// without routes, or route metrics that are not valid.
    async fn route(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, RoutingError>;

    /// Get the provider name (e.g., "mapmyindia", "openrouteservice")
    fn provider_name(&self) -> &'static str;
}
