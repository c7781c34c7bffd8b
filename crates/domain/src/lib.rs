//! Domain layer for ResQroute
//!
//! Contains the route resolution vocabulary (places, coordinates, route
//! geometry, outcomes), the pure geometry normalizer, and the vital-sign
//! triage classifiers. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod geometry;
pub mod triage;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use geometry::{NormalizedPath, PathFallback, PolylineError};
pub use triage::{TrafficLight, TriageProfile, VitalSigns, iot_light, safety_light};
pub use value_objects::*;
