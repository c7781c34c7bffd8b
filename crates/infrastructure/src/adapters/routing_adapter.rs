//! Routing adapter - Implements RoutingPort using integration_routing

use application::{error::ApplicationError, ports::RoutingPort};
use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
use integration_routing::{
    MapmyIndiaClient, OpenRouteServiceClient, RoutingClient, RoutingConfig, RoutingError,
};
use tracing::{debug, instrument};

/// Adapter exposing one routing client as a [`RoutingPort`]
#[derive(Debug)]
pub struct RoutingAdapter<C> {
    client: C,
}

impl<C: RoutingClient> RoutingAdapter<C> {
    /// Wrap an integration client
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Map integration routing error to application error
    fn map_error(err: RoutingError) -> ApplicationError {
        match err {
            RoutingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

impl RoutingAdapter<MapmyIndiaClient> {
    /// Build the primary tier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn mapmyindia(config: &RoutingConfig) -> Result<Self, ApplicationError> {
        MapmyIndiaClient::new(&config.mapmyindia)
            .map(Self::new)
            .map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

impl RoutingAdapter<OpenRouteServiceClient> {
    /// Build the fallback tier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn openrouteservice(config: &RoutingConfig) -> Result<Self, ApplicationError> {
        OpenRouteServiceClient::new(&config.openrouteservice)
            .map(Self::new)
            .map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<C: RoutingClient> RoutingPort for RoutingAdapter<C> {
    #[instrument(skip(self), fields(provider = self.client.provider_name()))]
    async fn route(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, ApplicationError> {
        let summary = self
            .client
            .route(source, destination)
            .await
            .map_err(Self::map_error)?;
        debug!(
            distance_km = summary.distance_km(),
            eta_minutes = summary.eta_minutes(),
            geometry = summary.geometry().kind(),
            "Route computed"
        );
        Ok(summary)
    }

    fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, RouteGeometry};

    use super::*;

    struct StubClient {
        result: fn() -> Result<RouteSummary, RoutingError>,
    }

    #[async_trait]
    impl RoutingClient for StubClient {
        async fn route(
            &self,
            _source: GeoLocation,
            _destination: GeoLocation,
        ) -> Result<RouteSummary, RoutingError> {
            (self.result)()
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    fn endpoints() -> (GeoLocation, GeoLocation) {
        (
            GeoLocation::new(28.6139, 77.209).unwrap(),
            GeoLocation::new(28.4595, 77.0266).unwrap(),
        )
    }

    #[tokio::test]
    async fn route_returns_summary() {
        let adapter = RoutingAdapter::new(StubClient {
            result: || {
                RouteSummary::from_wire(10_000.0, 600.0, RouteGeometry::Unavailable)
                    .map_err(RoutingError::from)
            },
        });
        let (source, destination) = endpoints();

        let summary = adapter.route(source, destination).await.unwrap();
        assert!((summary.distance_km() - 10.0).abs() < 1e-9);
        assert_eq!(adapter.provider_name(), "stub");
    }

    #[tokio::test]
    async fn no_route_becomes_external_service() {
        let adapter = RoutingAdapter::new(StubClient {
            result: || Err(RoutingError::NoRoute),
        });
        let (source, destination) = endpoints();

        let err = adapter.route(source, destination).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_configuration() {
        let err = RoutingError::ConfigurationError("openrouteservice API key not configured".into());
        let app_err = RoutingAdapter::<StubClient>::map_error(err);
        assert!(matches!(app_err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn map_error_invalid_route() {
        let err = RoutingError::InvalidRoute(DomainError::invalid_metric("duration", -1.0));
        let app_err = RoutingAdapter::<StubClient>::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(msg) if msg.contains("duration")));
    }

    #[test]
    fn builds_both_tiers_from_defaults() {
        let config = RoutingConfig::default();
        assert_eq!(
            RoutingAdapter::mapmyindia(&config).unwrap().provider_name(),
            "mapmyindia"
        );
        assert_eq!(
            RoutingAdapter::openrouteservice(&config)
                .unwrap()
                .provider_name(),
            "openrouteservice"
        );
    }
}
