//! Application services - Use case implementations

mod geocoding_resolver;
mod provider_chain;
mod route_resolution_service;
mod routing_resolver;

pub use geocoding_resolver::GeocodingResolver;
pub use provider_chain::{ProviderChain, ProviderTier};
pub use route_resolution_service::{PlanOutcome, RouteResolutionService};
pub use routing_resolver::RoutingResolver;
