//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, MapplsClient, NominatimClient,
};
use tracing::{debug, instrument};

/// Adapter exposing one geocoding client as a [`GeocodingPort`]
#[derive(Debug)]
pub struct GeocodingAdapter<C> {
    client: C,
}

impl<C: GeocodingClient> GeocodingAdapter<C> {
    /// Wrap an integration client
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

impl GeocodingAdapter<MapplsClient> {
    /// Build the primary tier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn mappls(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        MapplsClient::new(&config.mappls)
            .map(Self::new)
            .map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

impl GeocodingAdapter<NominatimClient> {
    /// Build the fallback tier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn nominatim(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        NominatimClient::new(&config.nominatim)
            .map(Self::new)
            .map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<C: GeocodingClient> GeocodingPort for GeocodingAdapter<C> {
    #[instrument(skip(self), fields(provider = self.client.provider_name()))]
    async fn geocode(&self, place: &Place) -> Result<GeoLocation, ApplicationError> {
        let location = self
            .client
            .geocode(place.as_str())
            .await
            .map_err(Self::map_error)?;
        debug!(%location, "Geocoded");
        Ok(location)
    }

    fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClient {
        result: fn(&str) -> Result<GeoLocation, GeocodingError>,
    }

    #[async_trait]
    impl GeocodingClient for StubClient {
        async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
            (self.result)(query)
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    fn place(text: &str) -> Place {
        Place::new(text).unwrap()
    }

    #[tokio::test]
    async fn geocode_passes_trimmed_label() {
        let adapter = GeocodingAdapter::new(StubClient {
            result: |query| {
                assert_eq!(query, "Connaught Place");
                Ok(GeoLocation::new(28.6315, 77.2167).unwrap())
            },
        });

        let location = adapter.geocode(&place("  Connaught Place ")).await.unwrap();
        assert!((location.latitude() - 28.6315).abs() < 1e-9);
        assert_eq!(adapter.provider_name(), "stub");
    }

    #[tokio::test]
    async fn provider_errors_become_external_service() {
        let adapter = GeocodingAdapter::new(StubClient {
            result: |_| Err(GeocodingError::RequestFailed("HTTP 503".to_string())),
        });

        let err = adapter.geocode(&place("Delhi")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(msg) if msg.contains("503")));
    }

    #[test]
    fn map_error_configuration() {
        let err = GeocodingError::ConfigurationError("Mappls access token not configured".into());
        let app_err = GeocodingAdapter::<StubClient>::map_error(err);
        assert!(matches!(app_err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn map_error_timeout() {
        let err = GeocodingError::Timeout { timeout_secs: 5 };
        let app_err = GeocodingAdapter::<StubClient>::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(msg) if msg.contains("5 seconds")));
    }

    #[test]
    fn builds_both_tiers_from_defaults() {
        let config = GeocodingConfig::default();
        assert_eq!(
            GeocodingAdapter::mappls(&config).unwrap().provider_name(),
            "mappls"
        );
        assert_eq!(
            GeocodingAdapter::nominatim(&config).unwrap().provider_name(),
            "nominatim"
        );
    }
}
