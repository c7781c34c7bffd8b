//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! console `fmt` layer. `RUST_LOG` wins over the filter passed in.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Default filter when neither `RUST_LOG` nor a verbosity flag is given
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Telemetry setup failures
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Map a `-v` count to a filter directive
///
/// 0 keeps [`DEFAULT_LOG_FILTER`], 1 enables debug, 2 or more enables trace.
#[must_use]
pub const fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "debug,hyper=info,reqwest=info",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a subscriber is already set.
pub fn init_logging(format: LogFormat, default_filter: &str) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filters() {
        assert_eq!(filter_for_verbosity(0), DEFAULT_LOG_FILTER);
        assert!(filter_for_verbosity(1).starts_with("debug"));
        assert_eq!(filter_for_verbosity(5), "trace");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(LogFormat::Text, "warn");
        assert!(matches!(
            init_logging(LogFormat::Json, "warn"),
            Err(TelemetryError::Init(_))
        ));
    }
}
