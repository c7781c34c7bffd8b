//! Service construction from configuration
//!
//! Builds the provider chains (Mappls then Nominatim, MapmyIndia then
//! openrouteservice) and the renderer, and hands them to the route
//! resolution service.

use std::sync::Arc;

use application::{
    GeocodingResolver, ProviderChain, RouteResolutionService, RoutingResolver,
    error::ApplicationError,
    ports::{GeocodingPort, MapRendererPort, RoutingPort},
};
use tracing::{info, warn};

use crate::{
    adapters::{GeocodingAdapter, LeafletMapRenderer, RoutingAdapter},
    config::AppConfig,
};

/// Build the route resolution service described by `config`
///
/// Missing credentials are not an error here: the affected tier fails at
/// call time and the chain moves on to its fallback.
///
/// # Errors
///
/// Returns an error if an HTTP client or the map template cannot be created.
pub fn build_route_service(config: &AppConfig) -> Result<RouteResolutionService, ApplicationError> {
    let geocoding = config.geocoding.to_geocoding_config();
    let routing = config.routing.to_routing_config();

    if geocoding.mappls.access_token.is_none() {
        warn!("Mappls access token not configured, geocoding will use Nominatim only");
    }
    if routing.mapmyindia.api_key.is_none() {
        warn!("MapmyIndia API key not configured, primary routing tier disabled");
    }
    if routing.openrouteservice.api_key.is_none() {
        warn!("openrouteservice API key not configured, fallback routing tier disabled");
    }

    let primary_geocoder: Arc<dyn GeocodingPort> = Arc::new(GeocodingAdapter::mappls(&geocoding)?);
    let fallback_geocoder: Arc<dyn GeocodingPort> =
        Arc::new(GeocodingAdapter::nominatim(&geocoding)?);
    let primary_router: Arc<dyn RoutingPort> = Arc::new(RoutingAdapter::mapmyindia(&routing)?);
    let fallback_router: Arc<dyn RoutingPort> =
        Arc::new(RoutingAdapter::openrouteservice(&routing)?);
    let renderer: Arc<dyn MapRendererPort> = Arc::new(LeafletMapRenderer::new(&config.map)?);

    info!(
        output = %config.map.output_path.display(),
        "Route resolution service ready"
    );

    Ok(RouteResolutionService::new(
        GeocodingResolver::new(ProviderChain::new(primary_geocoder, fallback_geocoder)),
        RoutingResolver::new(ProviderChain::new(primary_router, fallback_router)),
        renderer,
    ))
}
