//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod leaflet_map_renderer;
mod routing_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use leaflet_map_renderer::LeafletMapRenderer;
pub use routing_adapter::RoutingAdapter;
