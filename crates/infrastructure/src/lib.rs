//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: geocoding and routing
//! adapters over the integration crates, the Leaflet map renderer, layered
//! configuration, and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;
pub mod wiring;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, LogFormat, MapConfig, ServerConfig};
pub use telemetry::{TelemetryError, filter_for_verbosity, init_logging};
pub use templates::{TemplateEngine, TemplateError};
pub use wiring::build_route_service;
