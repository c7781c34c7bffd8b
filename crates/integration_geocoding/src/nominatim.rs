//! Nominatim geocoding client
//!
//! Converts free-form place strings to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::NominatimConfig,
    error::GeocodingError,
    models::{NominatimResult, to_location},
    provider::GeocodingClient,
};

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self), fields(provider = "nominatim"))]
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", query.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
        ];
        if let Some(codes) = self.config.country_codes.as_deref().filter(|c| !c.is_empty()) {
            params.push(("countrycodes", codes.to_string()));
        }

        debug!(%query, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;

        let location = to_location(Some(&result.lat), Some(&result.lon))?;
        debug!(
            %query,
            %location,
            display_name = result.display_name.as_deref().unwrap_or_default(),
            "Geocoded place"
        );
        Ok(location)
    }

    fn provider_name(&self) -> &'static str {
        "nominatim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        let client = NominatimClient::new(&NominatimConfig::default()).unwrap();
        assert_eq!(client.provider_name(), "nominatim");
        assert_eq!(client.config.user_agent, "resqroute");
    }
}
