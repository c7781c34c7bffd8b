//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: artifact server bind address and log format
//! - `map`: artifact path and zoom
//! - `providers`: geocoding and routing tiers, with credentials
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`
//! in the working directory, then `RESQROUTE_` environment variables with
//! `__` between nested keys (e.g. `RESQROUTE_ROUTING__OPENROUTESERVICE__API_KEY`).

mod map;
mod providers;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use map::MapConfig;
pub use providers::{
    GeocodingAppConfig, MapplsAppConfig, NominatimAppConfig, RoutingAppConfig,
    RoutingProviderAppConfig,
};
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RESQROUTE";

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were loaded but are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Map artifact configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Geocoding providers
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Routing providers
    #[serde(default)]
    pub routing: RoutingAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            config::File::with_name("config").required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, still honoring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::from_sources(config::File::from(path).required(true), environment())
    }

    fn from_sources<S>(file: S, environment: config::Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5005)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Log where the server binds, where the map goes, and which credentialed
    /// tiers are enabled
    ///
    /// Loading happens before logging is initialized, so binaries call this
    /// once the subscriber is installed. Secrets are never logged.
    pub fn log_summary(&self) {
        let geocoding = self.geocoding.to_geocoding_config();
        let routing = self.routing.to_routing_config();
        debug!(
            bind = %self.server.bind_address(),
            log_format = %self.server.log_format,
            output = %self.map.output_path.display(),
            zoom = self.map.zoom,
            mappls = geocoding.mappls.access_token.is_some(),
            mapmyindia = routing.mapmyindia.api_key.is_some(),
            openrouteservice = routing.openrouteservice.api_key.is_some(),
            "Configuration loaded"
        );
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation message encountered.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.map.validate()?;
        self.geocoding.to_geocoding_config().validate()?;
        self.routing.to_routing_config().validate()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use config::{File, FileFormat};
    use secrecy::ExposeSecret;

    use super::*;

    /// Log sink shared with the test body
    #[derive(Clone)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn toml(source: &str) -> File<config::FileSourceString, FileFormat> {
        File::from_str(source, FileFormat::Toml)
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        environment().source(Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::from_sources(toml(""), env(&[])).unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:5005");
        assert_eq!(config.map.output_path, Path::new("route_map.html"));
        assert!(config.geocoding.mappls.access_token.is_none());
    }

    #[test]
    fn test_file_values_are_applied() {
        let file = toml(
            r#"
            [server]
            port = 8088
            log_format = "json"

            [map]
            output_path = "/tmp/ambulance.html"

            [geocoding.mappls]
            access_token = "file-token"

            [routing.openrouteservice]
            api_key = "ors-from-file"
            profile = "driving-hgv"
            "#,
        );
        let config = AppConfig::from_sources(file, env(&[])).unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.map.output_path, Path::new("/tmp/ambulance.html"));
        assert_eq!(
            config
                .geocoding
                .mappls
                .access_token
                .as_ref()
                .map(ExposeSecret::expose_secret),
            Some("file-token")
        );
        let routing = config.routing.to_routing_config();
        assert_eq!(routing.openrouteservice.api_key.as_deref(), Some("ors-from-file"));
        assert_eq!(routing.openrouteservice.profile, "driving-hgv");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml("[server]\nport = 8088\n");
        let environment = env(&[
            ("RESQROUTE_SERVER__PORT", "9090"),
            ("RESQROUTE_ROUTING__MAPMYINDIA__API_KEY", "env-key"),
        ]);
        let config = AppConfig::from_sources(file, environment).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.routing.to_routing_config().mapmyindia.api_key.as_deref(),
            Some("env-key")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let file = toml("[routing.openrouteservice]\ntimeout_secs = 0\n");
        let result = AppConfig::from_sources(file, env(&[]));
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("timeout_secs")));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let result = AppConfig::from_sources(toml("[server\nport = "), env(&[]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_log_summary_reports_tiers_without_secrets() {
        let file = toml("[routing.mapmyindia]\napi_key = \"mmi-secret\"\n");
        let config = AppConfig::from_sources(file, env(&[])).unwrap();

        let logs = captured_logs(|| config.log_summary());

        assert!(logs.contains("Configuration loaded"), "{logs}");
        assert!(logs.contains("bind=0.0.0.0:5005"), "{logs}");
        assert!(logs.contains("mapmyindia=true"), "{logs}");
        assert!(logs.contains("mappls=false"), "{logs}");
        assert!(!logs.contains("mmi-secret"), "{logs}");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load_from(Path::new("/nonexistent/resqroute.toml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
