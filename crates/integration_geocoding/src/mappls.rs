//! Mappls geocoding client
//!
//! Client for the Mappls Atlas geocode API (<https://about.mappls.com/api/>).
//! Authenticated with a bearer token; the first candidate wins.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::MapplsConfig,
    error::GeocodingError,
    models::{MapplsResponse, to_location},
    provider::GeocodingClient,
};

/// Mappls geocoding client
pub struct MapplsClient {
    client: Client,
    access_token: Option<String>,
    base_url: String,
    timeout_secs: u64,
}

impl fmt::Debug for MapplsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapplsClient")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl MapplsClient {
    /// Create a new Mappls client
    ///
    /// A missing access token is not an error here; requests fail at call
    /// time instead so the fallback tier still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &MapplsConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn geocode_url(&self) -> String {
        format!("{}/api/places/geocode", self.base_url)
    }
}

#[async_trait]
impl GeocodingClient for MapplsClient {
    #[instrument(skip(self), fields(provider = "mappls"))]
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
        let token = self.access_token.as_deref().ok_or_else(|| {
            GeocodingError::ConfigurationError("Mappls access token is not set".to_string())
        })?;

        debug!(%query, "Sending Mappls geocode request");

        let response = self
            .client
            .get(self.geocode_url())
            .bearer_auth(token)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: MapplsResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let first = body
            .results
            .first()
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;

        let location = to_location(first.latitude.as_ref(), first.longitude.as_ref())?;
        debug!(%query, %location, "Mappls geocoded place");
        Ok(location)
    }

    fn provider_name(&self) -> &'static str {
        "mappls"
    }
}
