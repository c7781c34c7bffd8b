//! Geocoding provider configuration

use serde::{Deserialize, Serialize};

/// Configuration for both geocoding tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Primary provider
    #[serde(default)]
    pub mappls: MapplsConfig,

    /// Fallback provider
    #[serde(default)]
    pub nominatim: NominatimConfig,
}

impl GeocodingConfig {
    /// Validate both provider sections
    ///
    /// # Errors
    ///
    /// Returns the first validation message from either section.
    pub fn validate(&self) -> Result<(), String> {
        self.mappls.validate()?;
        self.nominatim.validate()
    }
}

/// Configuration for the Mappls geocoding API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapplsConfig {
    /// Bearer token; without it the tier fails without sending a request
    #[serde(default)]
    pub access_token: Option<String>,

    /// Base URL for the Mappls Atlas API
    #[serde(default = "default_mappls_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mappls_base_url() -> String {
    "https://atlas.mappls.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for MapplsConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: default_mappls_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MapplsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            access_token: Some("test-token".to_string()),
            base_url: base_url.into(),
            timeout_secs: 2,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the timeout or URL is unusable.
    pub fn validate(&self) -> Result<(), String> {
        validate_common("mappls", &self.base_url, self.timeout_secs)
    }
}

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// User agent sent with every request (required by the usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional comma-separated country code filter (e.g., "in")
    #[serde(default)]
    pub country_codes: Option<String>,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "resqroute".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            country_codes: None,
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the timeout, URL, or user agent is unusable.
    pub fn validate(&self) -> Result<(), String> {
        validate_common("nominatim", &self.base_url, self.timeout_secs)?;
        if self.user_agent.trim().is_empty() {
            return Err("nominatim.user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

fn validate_common(section: &str, base_url: &str, timeout_secs: u64) -> Result<(), String> {
    if timeout_secs == 0 {
        return Err(format!("{section}.timeout_secs must be greater than 0"));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(format!("{section}.base_url must be an http(s) URL"));
    }
    Ok(())
}
