//! Map rendering port
//!
//! The renderer takes ownership of a resolved route, writes the map artifact
//! to its fixed location, and reports what it wrote.

use std::path::PathBuf;

use async_trait::async_trait;
use domain::RouteResult;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Summary of a written map artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMap {
    /// Where the artifact was written
    pub path: PathBuf,
    /// Route length in kilometers
    pub distance_km: f64,
    /// Travel time in minutes
    pub eta_minutes: f64,
    /// Number of points drawn on the path
    pub point_count: usize,
    /// Whether the straight source-destination segment replaced the
    /// provider geometry
    pub straight_line: bool,
}

impl RenderedMap {
    /// One-line distance/time report, two decimals each
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "Distance: {:.2} km, ETA: {:.2} min",
            self.distance_km, self.eta_minutes
        )
    }
}

/// Port for producing the map artifact
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MapRendererPort: Send + Sync {
    /// Render the route and persist it, overwriting any previous artifact
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Rendering` if the document cannot be
    /// generated or written.
    async fn render(&self, route: RouteResult) -> Result<RenderedMap, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_two_decimals() {
        let map = RenderedMap {
            path: PathBuf::from("route_map.html"),
            distance_km: 12.346,
            eta_minutes: 7.0,
            point_count: 2,
            straight_line: true,
        };
        assert_eq!(map.format_summary(), "Distance: 12.35 km, ETA: 7.00 min");
    }
}
