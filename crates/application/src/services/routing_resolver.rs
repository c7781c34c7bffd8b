//! Routing resolver
//!
//! Resolves a coordinate pair through the routing chain. Geometry is passed
//! through untouched; it is normalized only when the map is rendered.

use std::fmt;

use domain::{GeoLocation, ResolutionFailure, RouteSummary};
use tracing::{info, instrument, warn};

use crate::ports::RoutingPort;
use crate::services::ProviderChain;

/// Primary-then-fallback routing
pub struct RoutingResolver {
    chain: ProviderChain<dyn RoutingPort>,
}

impl fmt::Debug for RoutingResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingResolver")
            .field("primary", &self.chain.primary().provider_name())
            .field("fallback", &self.chain.fallback().provider_name())
            .finish()
    }
}

impl RoutingResolver {
    /// Create a resolver over a routing chain
    #[must_use]
    pub const fn new(chain: ProviderChain<dyn RoutingPort>) -> Self {
        Self { chain }
    }

    /// Compute a route using the first tier that succeeds
    ///
    /// # Errors
    ///
    /// Returns `ResolutionFailure::RouteFailed` when both tiers fail.
    #[instrument(skip_all, fields(source = %source, destination = %destination))]
    pub async fn resolve(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, ResolutionFailure> {
        for (tier, provider) in self.chain.tiers() {
            match provider.route(source, destination).await {
                Ok(summary) => {
                    info!(
                        %tier,
                        provider = provider.provider_name(),
                        distance_km = summary.distance_km(),
                        eta_minutes = summary.eta_minutes(),
                        geometry = summary.geometry().kind(),
                        "Route resolved"
                    );
                    return Ok(summary);
                },
                Err(e) => {
                    warn!(
                        %tier,
                        provider = provider.provider_name(),
                        error = %e,
                        "Routing tier failed"
                    );
                },
            }
        }
        Err(ResolutionFailure::RouteFailed)
    }
}
