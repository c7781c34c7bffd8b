//! Provider configurations: geocoding (Mappls, Nominatim) and routing
//! (MapmyIndia, openrouteservice).
//!
//! Credentials are held as `SecretString` here and only exposed when the
//! integration crate configs are built. Unset fields fall back to the
//! integration crate defaults.

use integration_geocoding::{GeocodingConfig, MapplsConfig, NominatimConfig};
use integration_routing::{MapmyIndiaConfig, OpenRouteServiceConfig, RoutingConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn expose(secret: Option<&SecretString>) -> Option<String> {
    secret
        .map(|s| s.expose_secret().trim().to_string())
        .filter(|s| !s.is_empty())
}

// ==============================
// Geocoding Configuration
// ==============================

/// Geocoding tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Primary tier
    #[serde(default)]
    pub mappls: MapplsAppConfig,

    /// Fallback tier
    #[serde(default)]
    pub nominatim: NominatimAppConfig,
}

/// Mappls geocoding settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapplsAppConfig {
    /// Bearer token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Override for the Atlas base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Nominatim geocoding settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NominatimAppConfig {
    /// Override for the Nominatim base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// User-Agent sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Comma-separated ISO country codes limiting results (e.g., "in")
    #[serde(default)]
    pub country_codes: Option<String>,
}

impl GeocodingAppConfig {
    /// Build the integration crate configuration
    #[must_use]
    pub fn to_geocoding_config(&self) -> GeocodingConfig {
        let mappls_defaults = MapplsConfig::default();
        let nominatim_defaults = NominatimConfig::default();

        GeocodingConfig {
            mappls: MapplsConfig {
                access_token: expose(self.mappls.access_token.as_ref()),
                base_url: self
                    .mappls
                    .base_url
                    .clone()
                    .unwrap_or(mappls_defaults.base_url),
                timeout_secs: self
                    .mappls
                    .timeout_secs
                    .unwrap_or(mappls_defaults.timeout_secs),
            },
            nominatim: NominatimConfig {
                base_url: self
                    .nominatim
                    .base_url
                    .clone()
                    .unwrap_or(nominatim_defaults.base_url),
                user_agent: self
                    .nominatim
                    .user_agent
                    .clone()
                    .unwrap_or(nominatim_defaults.user_agent),
                timeout_secs: self
                    .nominatim
                    .timeout_secs
                    .unwrap_or(nominatim_defaults.timeout_secs),
                country_codes: self.nominatim.country_codes.clone(),
            },
        }
    }
}

// ==============================
// Routing Configuration
// ==============================

/// Routing tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// Primary tier
    #[serde(default)]
    pub mapmyindia: RoutingProviderAppConfig,

    /// Fallback tier
    #[serde(default)]
    pub openrouteservice: RoutingProviderAppConfig,
}

/// Settings shared by both routing providers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingProviderAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Override for the provider base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Override for the routing profile
    #[serde(default)]
    pub profile: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RoutingAppConfig {
    /// Build the integration crate configuration
    #[must_use]
    pub fn to_routing_config(&self) -> RoutingConfig {
        let mapmyindia_defaults = MapmyIndiaConfig::default();
        let ors_defaults = OpenRouteServiceConfig::default();
        let primary = &self.mapmyindia;
        let fallback = &self.openrouteservice;

        RoutingConfig {
            mapmyindia: MapmyIndiaConfig {
                api_key: expose(primary.api_key.as_ref()),
                base_url: primary
                    .base_url
                    .clone()
                    .unwrap_or(mapmyindia_defaults.base_url),
                profile: primary
                    .profile
                    .clone()
                    .unwrap_or(mapmyindia_defaults.profile),
                timeout_secs: primary
                    .timeout_secs
                    .unwrap_or(mapmyindia_defaults.timeout_secs),
            },
            openrouteservice: OpenRouteServiceConfig {
                api_key: expose(fallback.api_key.as_ref()),
                base_url: fallback.base_url.clone().unwrap_or(ors_defaults.base_url),
                profile: fallback.profile.clone().unwrap_or(ors_defaults.profile),
                timeout_secs: fallback.timeout_secs.unwrap_or(ors_defaults.timeout_secs),
            },
        }
    }
}
