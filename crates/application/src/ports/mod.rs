//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod map_renderer_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use map_renderer_port::{MapRendererPort, RenderedMap};
#[cfg(test)]
pub use map_renderer_port::MockMapRendererPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
