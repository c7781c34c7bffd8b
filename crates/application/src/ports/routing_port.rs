//! Routing service port
//!
//! Defines the interface for computing a drivable route between two
//! coordinates. Implementations own any provider-specific axis ordering.

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a single routing provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute the first route between two coordinates
    ///
    /// The returned summary carries distance in kilometers, duration in
    /// minutes, and the provider's geometry untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ExternalService` on timeout, transport
    /// failure, non-success status, or a payload without a usable route.
    async fn route(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, ApplicationError>;

    /// Short provider label for logs
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }
}
