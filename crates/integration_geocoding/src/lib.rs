#![forbid(unsafe_code)]
//! Geocoding integration for ResQroute
//!
//! Turns free-text places into coordinates. Two providers are available:
//! [`MapplsClient`] (bearer-token authenticated, primary) and
//! [`NominatimClient`] (OpenStreetMap, fallback). Both implement
//! [`GeocodingClient`]; chaining them is left to the application layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimClient, NominatimConfig};
//!
//! let client = NominatimClient::new(&NominatimConfig::default())?;
//! let location = client.geocode("India Gate, New Delhi").await?;
//! println!("{location}");
//! ```

mod config;
mod error;
mod mappls;
mod models;
mod nominatim;
mod provider;

pub use config::{GeocodingConfig, MapplsConfig, NominatimConfig};
pub use error::GeocodingError;
pub use mappls::MapplsClient;
pub use nominatim::NominatimClient;
pub use provider::GeocodingClient;
