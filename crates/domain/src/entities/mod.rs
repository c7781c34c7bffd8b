//! Domain entities - Objects produced by one route resolution

mod outcome;
mod route;

pub use outcome::{ResolutionFailure, ResolutionOutcome};
pub use route::{RouteGeometry, RouteResult, RouteSummary};
