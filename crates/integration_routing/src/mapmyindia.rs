//! MapmyIndia routing client
//!
//! Client for the MapmyIndia (Mappls) advanced maps `route_adv` endpoint.
//! The key travels in the path, coordinates as `lng,lat;lng,lat`.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::MapmyIndiaConfig, error::RoutingError, models::DirectionsResponse,
    provider::RoutingClient,
};

/// MapmyIndia routing client
pub struct MapmyIndiaClient {
    client: Client,
    config: MapmyIndiaConfig,
}

impl fmt::Debug for MapmyIndiaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapmyIndiaClient")
            .field("base_url", &self.config.base_url)
            .field("profile", &self.config.profile)
            .field("api_key", &self.config.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.config.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl MapmyIndiaClient {
    /// Create a new MapmyIndia routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &MapmyIndiaConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the route URL (without query string)
    fn build_route_url(&self, api_key: &str, source: GeoLocation, destination: GeoLocation) -> String {
        let [source_lng, source_lat] = source.to_lng_lat();
        let [destination_lng, destination_lat] = destination.to_lng_lat();
        format!(
            "{}/{}/route_adv/{}/{source_lng},{source_lat};{destination_lng},{destination_lat}",
            self.config.base_url.trim_end_matches('/'),
            api_key,
            self.config.profile,
        )
    }
}

#[async_trait]
impl RoutingClient for MapmyIndiaClient {
    #[instrument(skip(self), fields(provider = "mapmyindia"))]
    async fn route(
        &self,
        source: GeoLocation,
        destination: GeoLocation,
    ) -> Result<RouteSummary, RoutingError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            RoutingError::ConfigurationError("MapmyIndia API key is not set".to_string())
        })?;

        let url = self.build_route_url(api_key, source, destination);
        debug!("Sending MapmyIndia route request");

        let response = self
            .client
            .get(&url)
            .query(&[("geometries", "polyline"), ("overview", "full")])
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

        body.into_first_route()?.into_top_level_summary()
    }

    fn provider_name(&self) -> &'static str {
        "mapmyindia"
    }
}
