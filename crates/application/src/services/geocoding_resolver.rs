//! Geocoding resolver
//!
//! Resolves one place through the geocoding chain. Any provider error is
//! logged and collapsed into "try the next tier"; only the final
//! [`ResolutionFailure::GeocodeFailed`] reaches the caller.

use std::fmt;

use domain::{GeoLocation, Place, ResolutionFailure};
use tracing::{info, instrument, warn};

use crate::ports::GeocodingPort;
use crate::services::ProviderChain;

/// Primary-then-fallback geocoding
pub struct GeocodingResolver {
    chain: ProviderChain<dyn GeocodingPort>,
}

impl fmt::Debug for GeocodingResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingResolver")
            .field("primary", &self.chain.primary().provider_name())
            .field("fallback", &self.chain.fallback().provider_name())
            .finish()
    }
}

impl GeocodingResolver {
    /// Create a resolver over a geocoding chain
    #[must_use]
    pub const fn new(chain: ProviderChain<dyn GeocodingPort>) -> Self {
        Self { chain }
    }

    /// Resolve a place to the first coordinate any tier returns
    ///
    /// # Errors
    ///
    /// Returns `ResolutionFailure::GeocodeFailed` when both tiers fail.
    #[instrument(skip_all, fields(place = %place))]
    pub async fn resolve(&self, place: &Place) -> Result<GeoLocation, ResolutionFailure> {
        for (tier, provider) in self.chain.tiers() {
            match provider.geocode(place).await {
                Ok(location) => {
                    info!(
                        %tier,
                        provider = provider.provider_name(),
                        %location,
                        "Place resolved"
                    );
                    return Ok(location);
                },
                Err(e) => {
                    warn!(
                        %tier,
                        provider = provider.provider_name(),
                        error = %e,
                        "Geocoding tier failed"
                    );
                },
            }
        }
        Err(ResolutionFailure::GeocodeFailed)
    }
}
