//! openrouteservice routing client
//!
//! Client for the openrouteservice directions API
//! (<https://openrouteservice.org/dev/#/api-docs/v2/directions>).

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    config::OpenRouteServiceConfig, error::RoutingError, models::DirectionsResponse,
    provider::RoutingClient,
};

/// Directions request body
#[derive(Debug, Serialize)]
struct DirectionsRequest {
    coordinates: [[f64; 2]; 2],
}

/// openrouteservice routing client
pub struct OpenRouteServiceClient {
    client: Client,
    config: OpenRouteServiceConfig,
}

impl fmt::Debug for OpenRouteServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouteServiceClient")
            .field("base_url", &self.config.base_url)
            .field("profile", &self.config.profile)
            .field("api_key", &self.config.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.config.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OpenRouteServiceClient {
    /// Create a new openrouteservice client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &OpenRouteServiceConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }
}

#[async_trait]
impl RoutingClient for OpenRouteServiceClient {
    #[instrument(skip(self), fields(provider = "openrouteservice"))]
    async fn route(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, RoutingError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            RoutingError::ConfigurationError("openrouteservice API key is not set".to_string())
        })?;

        let request = DirectionsRequest {
            coordinates: [source.to_lng_lat(), destination.to_lng_lat()],
        };
        debug!(profile = %self.config.profile, "Sending openrouteservice directions request");

        let response = self
            .client
            .post(self.directions_url())
            .header("Authorization", api_key)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RoutingError::from_transport(e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(RoutingError::from_decode)?;

        body.into_first_route()?.into_nested_summary()
    }

    fn provider_name(&self) -> &'static str {
        "openrouteservice"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_url() {
        let client =
            OpenRouteServiceClient::new(&OpenRouteServiceConfig::for_testing("http://ors.local"))
                .unwrap();
        assert_eq!(client.directions_url(), "http://ors.local/v2/directions/driving-car");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = OpenRouteServiceConfig {
            api_key: Some("ors-secret".to_string()),
            ..OpenRouteServiceConfig::for_testing("http://ors.local")
        };
        let debug = format!("{:?}", OpenRouteServiceClient::new(&config).unwrap());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ors-secret"));
    }

    #[test]
    fn test_request_body_is_lng_lat() {
        let request = DirectionsRequest {
            coordinates: [
                GeoLocation::new(28.5, 77.25).unwrap().to_lng_lat(),
                GeoLocation::new(27.125, 78.0).unwrap().to_lng_lat(),
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "coordinates": [[77.25, 28.5], [78.0, 27.125]] })
        );
    }
}
