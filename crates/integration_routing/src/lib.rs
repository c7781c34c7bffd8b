#![forbid(unsafe_code)]
//! Routing integration for ResQroute
//!
//! Computes a drivable route between two coordinates. Two providers are
//! available: [`MapmyIndiaClient`] (configuration-driven primary) and
//! [`OpenRouteServiceClient`] (fallback). Both implement [`RoutingClient`]
//! and return a [`domain::RouteSummary`] with distance in kilometers,
//! duration in minutes, and the provider geometry untouched.
//!
//! Both providers take coordinates as `longitude,latitude`; the reordering
//! happens here and never leaks to callers.

mod config;
mod error;
mod mapmyindia;
mod models;
mod openrouteservice;
mod provider;

pub use config::{MapmyIndiaConfig, OpenRouteServiceConfig, RoutingConfig};
pub use error::RoutingError;
pub use mapmyindia::MapmyIndiaClient;
pub use models::parse_geometry;
pub use openrouteservice::OpenRouteServiceClient;
pub use provider::RoutingClient;
