//! Routing provider configuration

use serde::{Deserialize, Serialize};

/// Configuration for both routing tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Primary provider
    #[serde(default)]
    pub mapmyindia: MapmyIndiaConfig,

    /// Fallback provider
    #[serde(default)]
    pub openrouteservice: OpenRouteServiceConfig,
}

impl RoutingConfig {
    /// Validate both provider sections
    ///
    /// # Errors
    ///
    /// Returns the first validation message from either section.
    pub fn validate(&self) -> Result<(), String> {
        self.mapmyindia.validate()?;
        self.openrouteservice.validate()
    }
}

/// Configuration for the MapmyIndia advanced maps routing API
///
/// The endpoint layout is configurable because no public URL pattern is
/// assumed to work; an unset key makes the tier fail without a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapmyIndiaConfig {
    /// REST key, embedded in the request path
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL up to (not including) the key segment
    #[serde(default = "default_mapmyindia_base_url")]
    pub base_url: String,

    /// Routing profile segment (e.g., "driving")
    #[serde(default = "default_mapmyindia_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mapmyindia_base_url() -> String {
    "https://apis.mappls.com/advancedmaps/v1".to_string()
}

fn default_mapmyindia_profile() -> String {
    "driving".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for MapmyIndiaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_mapmyindia_base_url(),
            profile: default_mapmyindia_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MapmyIndiaConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            base_url: base_url.into(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the timeout, URL, or profile is unusable.
    pub fn validate(&self) -> Result<(), String> {
        validate_common("mapmyindia", &self.base_url, &self.profile, self.timeout_secs)
    }
}

/// Configuration for the openrouteservice directions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouteServiceConfig {
    /// API key sent in the `Authorization` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the API
    #[serde(default = "default_ors_base_url")]
    pub base_url: String,

    /// Directions profile (e.g., "driving-car")
    #[serde(default = "default_ors_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ors_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_ors_profile() -> String {
    "driving-car".to_string()
}

impl Default for OpenRouteServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_ors_base_url(),
            profile: default_ors_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenRouteServiceConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some("test-ors-key".to_string()),
            base_url: base_url.into(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the timeout, URL, or profile is unusable.
    pub fn validate(&self) -> Result<(), String> {
        validate_common(
            "openrouteservice",
            &self.base_url,
            &self.profile,
            self.timeout_secs,
        )
    }
}

fn validate_common(
    section: &str,
    base_url: &str,
    profile: &str,
    timeout_secs: u64,
) -> Result<(), String> {
    if timeout_secs == 0 {
        return Err(format!("{section}.timeout_secs must be greater than 0"));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(format!("{section}.base_url must be an http(s) URL"));
    }
    if profile.trim().is_empty() || profile.contains('/') {
        return Err(format!("{section}.profile must be a single path segment"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(
            config.mapmyindia.base_url,
            "https://apis.mappls.com/advancedmaps/v1"
        );
        assert_eq!(config.mapmyindia.profile, "driving");
        assert!(config.mapmyindia.api_key.is_none());
        assert_eq!(config.openrouteservice.base_url, "https://api.openrouteservice.org");
        assert_eq!(config.openrouteservice.profile, "driving-car");
        assert_eq!(config.openrouteservice.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = OpenRouteServiceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_nested_profile() {
        let config = MapmyIndiaConfig {
            profile: "driving/../x".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("profile"));
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"openrouteservice": {"api_key": "k", "profile": "driving-hgv"}}"#;
        let config: RoutingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.openrouteservice.api_key.as_deref(), Some("k"));
        assert_eq!(config.openrouteservice.profile, "driving-hgv");
        assert_eq!(config.mapmyindia.profile, "driving");
    }
}
