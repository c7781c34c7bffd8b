//! Application layer - Use cases and orchestration
//!
//! Defines the provider ports, the two-tier provider chains, and the route
//! resolution use case that sequences geocoding, routing and rendering.
//! Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
