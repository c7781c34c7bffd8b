//! Route resolution service
//!
//! Sequences one request through
//! `Start -> Geocoding -> (GeocodeFailed | Routing) -> (RouteFailed | Resolved)`.
//! The service performs no retries of its own; fallback lives in the two
//! resolvers. Rendering happens only for a resolved route.

use std::{fmt, sync::Arc};

use domain::{Place, ResolutionFailure, ResolutionOutcome, RouteResult};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{MapRendererPort, RenderedMap},
    services::{GeocodingResolver, RoutingResolver},
};

/// Result of [`RouteResolutionService::plan`]
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// Route resolved and the map artifact was written
    Rendered(RenderedMap),
    /// Resolution failed; nothing was written
    Failed(ResolutionFailure),
}

/// Orchestrates geocoding, routing and rendering for one request
pub struct RouteResolutionService {
    geocoder: GeocodingResolver,
    router: RoutingResolver,
    renderer: Arc<dyn MapRendererPort>,
}

impl fmt::Debug for RouteResolutionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolutionService")
            .field("geocoder", &self.geocoder)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl RouteResolutionService {
    /// Create the service from its resolvers and renderer
    #[must_use]
    pub fn new(
        geocoder: GeocodingResolver,
        router: RoutingResolver,
        renderer: Arc<dyn MapRendererPort>,
    ) -> Self {
        Self {
            geocoder,
            router,
            renderer,
        }
    }

    /// Resolve both places and the route between them
    ///
    /// Source and destination are geocoded independently, source first.
    /// Routing runs only if both resolved.
    #[instrument(skip_all, fields(source = %source, destination = %destination))]
    pub async fn resolve(&self, source: &Place, destination: &Place) -> ResolutionOutcome {
        let source_location = self.geocoder.resolve(source).await;
        let destination_location = self.geocoder.resolve(destination).await;

        let (Ok(source_location), Ok(destination_location)) =
            (source_location, destination_location)
        else {
            warn!("Geocoding exhausted all providers");
            return ResolutionOutcome::failed(ResolutionFailure::GeocodeFailed);
        };

        match self
            .router
            .resolve(source_location, destination_location)
            .await
        {
            Ok(summary) => {
                let route = RouteResult::new(summary, source_location, destination_location);
                info!(summary = %route.format_summary(), "Route resolution complete");
                ResolutionOutcome::Resolved(route)
            },
            Err(failure) => {
                warn!("Routing exhausted all providers");
                ResolutionOutcome::failed(failure)
            },
        }
    }

    /// Resolve the route and, if resolved, render the map artifact
    ///
    /// # Errors
    ///
    /// Returns an error only if the renderer fails. Resolution failures are
    /// reported as [`PlanOutcome::Failed`].
    pub async fn plan(
        &self,
        source: &Place,
        destination: &Place,
    ) -> Result<PlanOutcome, ApplicationError> {
        match self.resolve(source, destination).await {
            ResolutionOutcome::Resolved(route) => {
                let rendered = self.renderer.render(route).await?;
                Ok(PlanOutcome::Rendered(rendered))
            },
            ResolutionOutcome::Failed(failure) => Ok(PlanOutcome::Failed(failure)),
        }
    }
}
