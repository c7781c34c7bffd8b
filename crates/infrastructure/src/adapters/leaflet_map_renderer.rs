//! Leaflet map renderer - Implements MapRendererPort with an HTML artifact
//!
//! The artifact is a single self-contained page written to one fixed path.
//! Every render overwrites it.

use std::path::{Path, PathBuf};

use application::{
    error::ApplicationError,
    ports::{MapRendererPort, RenderedMap},
};
use async_trait::async_trait;
use domain::{GeoLocation, NormalizedPath, PathFallback, RouteResult, geometry};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::MapConfig,
    templates::{RouteMapView, TemplateEngine},
};

/// Writes the route map page
#[derive(Debug, Clone)]
pub struct LeafletMapRenderer {
    engine: TemplateEngine,
    output_path: PathBuf,
    zoom: u8,
}

impl LeafletMapRenderer {
    /// Create a renderer from the map configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Rendering` if the embedded template does
    /// not compile.
    pub fn new(config: &MapConfig) -> Result<Self, ApplicationError> {
        let engine =
            TemplateEngine::new().map_err(|e| ApplicationError::Rendering(e.to_string()))?;
        Ok(Self {
            engine,
            output_path: config.output_path.clone(),
            zoom: config.zoom,
        })
    }

    /// Fixed artifact location
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn build_view(&self, route: &RouteResult, path: &NormalizedPath) -> RouteMapView {
        let center = path.midpoint().unwrap_or_else(|| route.source());
        RouteMapView {
            center: center.to_lat_lng(),
            zoom: self.zoom,
            path: path.points().iter().map(GeoLocation::to_lat_lng).collect(),
            source: route.source().to_lat_lng(),
            destination: route.destination().to_lat_lng(),
            distance_km: format!("{:.2}", route.distance_km()),
            eta_minutes: format!("{:.2}", route.eta_minutes()),
            straight_line: path.is_fallback(),
        }
    }
}

fn log_fallback(reason: PathFallback) {
    match reason {
        PathFallback::Unavailable => {
            info!("No route geometry, drawing straight source-destination segment");
        },
        other => warn!(reason = %other, "Route geometry unusable, drawing straight segment"),
    }
}

#[async_trait]
impl MapRendererPort for LeafletMapRenderer {
    #[instrument(skip_all, fields(output = %self.output_path.display()))]
    async fn render(&self, route: RouteResult) -> Result<RenderedMap, ApplicationError> {
        let path = geometry::normalize(route.geometry(), route.endpoints());
        if let Some(reason) = path.fallback() {
            log_fallback(reason);
        }

        let view = self.build_view(&route, &path);
        info!(
            distance_km = %view.distance_km,
            eta_minutes = %view.eta_minutes,
            points = view.path.len(),
            "{}",
            route.format_summary()
        );

        let html = self
            .engine
            .render_route_map(&view)
            .map_err(|e| ApplicationError::Rendering(e.to_string()))?;

        tokio::fs::write(&self.output_path, html)
            .await
            .map_err(|e| {
                ApplicationError::Rendering(format!(
                    "failed to write {}: {e}",
                    self.output_path.display()
                ))
            })?;
        debug!("Map artifact written");

        Ok(RenderedMap {
            path: self.output_path.clone(),
            distance_km: route.distance_km(),
            eta_minutes: route.eta_minutes(),
            point_count: view.path.len(),
            straight_line: view.straight_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use domain::{RouteGeometry, RouteSummary, geometry::encode_polyline};
    use tempfile::TempDir;

    use super::*;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.209).unwrap()
    }

    fn gurgaon() -> GeoLocation {
        GeoLocation::new(28.4595, 77.0266).unwrap()
    }

    fn route_with(geometry: RouteGeometry) -> RouteResult {
        let summary = RouteSummary::from_wire(32_150.0, 2_520.0, geometry).unwrap();
        RouteResult::new(summary, delhi(), gurgaon())
    }

    fn renderer_in(dir: &TempDir) -> LeafletMapRenderer {
        let config = MapConfig {
            output_path: dir.path().join("route_map.html"),
            ..Default::default()
        };
        LeafletMapRenderer::new(&config).unwrap()
    }

    #[tokio::test]
    async fn renders_encoded_path() {
        let dir = TempDir::new().unwrap();
        let renderer = renderer_in(&dir);
        let middle = GeoLocation::new(28.5, 77.1).unwrap();
        let encoded = encode_polyline(&[delhi(), middle, gurgaon()]);

        let rendered = renderer
            .render(route_with(RouteGeometry::EncodedPath(encoded)))
            .await
            .unwrap();

        assert_eq!(rendered.point_count, 3);
        assert!(!rendered.straight_line);
        assert_eq!(rendered.format_summary(), "Distance: 32.15 km, ETA: 42.00 min");

        let html = std::fs::read_to_string(renderer.output_path()).unwrap();
        assert!(html.contains("setView([28.5,77.1], 12)"));
        assert!(html.contains(r#"bindPopup("Source")"#));
    }

    #[tokio::test]
    async fn point_list_is_reordered_to_lat_lng() {
        let dir = TempDir::new().unwrap();
        let renderer = renderer_in(&dir);
        let geometry = RouteGeometry::PointList(vec![[77.209, 28.6139], [77.0266, 28.4595]]);

        renderer.render(route_with(geometry)).await.unwrap();

        let html = std::fs::read_to_string(renderer.output_path()).unwrap();
        assert!(html.contains("[[28.6139,77.209],[28.4595,77.0266]]"));
    }

    #[tokio::test]
    async fn unusable_geometry_draws_straight_segment() {
        let dir = TempDir::new().unwrap();
        let renderer = renderer_in(&dir);

        let rendered = renderer
            .render(route_with(RouteGeometry::EncodedPath("_p~iF~ps|U_".to_string())))
            .await
            .unwrap();

        assert_eq!(rendered.point_count, 2);
        assert!(rendered.straight_line);
    }

    #[tokio::test]
    async fn second_render_overwrites_artifact() {
        let dir = TempDir::new().unwrap();
        let renderer = renderer_in(&dir);

        renderer
            .render(route_with(RouteGeometry::Unavailable))
            .await
            .unwrap();
        let summary = RouteSummary::from_wire(5_000.0, 300.0, RouteGeometry::Unavailable).unwrap();
        renderer
            .render(RouteResult::new(summary, delhi(), gurgaon()))
            .await
            .unwrap();

        let html = std::fs::read_to_string(renderer.output_path()).unwrap();
        assert!(html.contains("Distance: 5.00 km"));
        assert!(!html.contains("Distance: 32.15 km"));
    }

    #[tokio::test]
    async fn unwritable_path_is_rendering_error() {
        let dir = TempDir::new().unwrap();
        let config = MapConfig {
            output_path: dir.path().join("missing").join("route_map.html"),
            ..Default::default()
        };
        let renderer = LeafletMapRenderer::new(&config).unwrap();

        let err = renderer
            .render(route_with(RouteGeometry::Unavailable))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Rendering(msg) if msg.contains("failed to write")));
    }
}
