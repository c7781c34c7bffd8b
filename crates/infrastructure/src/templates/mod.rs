//! Template engine for the route map artifact
//!
//! Uses Tera with an embedded Leaflet page. Coordinates are passed to the
//! page as JSON arrays in `[lat, lng]` order, the order Leaflet expects.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{RouteMapView, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_route_map(&view)?;
//! ```

use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// Name of the embedded route map template
pub const ROUTE_MAP_TEMPLATE: &str = "route_map.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Everything the route map page needs
#[derive(Debug, Clone, Serialize)]
pub struct RouteMapView {
    /// Initial map center, `[lat, lng]`
    pub center: [f64; 2],
    /// Initial zoom level
    pub zoom: u8,
    /// Path vertices in drawing order, `[lat, lng]`
    pub path: Vec<[f64; 2]>,
    /// Source marker, `[lat, lng]`
    pub source: [f64; 2],
    /// Destination marker, `[lat, lng]`
    pub destination: [f64; 2],
    /// Pre-formatted distance, two decimals
    pub distance_km: String,
    /// Pre-formatted travel time, two decimals
    pub eta_minutes: String,
    /// Whether the path is the straight source-destination segment
    pub straight_line: bool,
}

/// Embedded templates
mod embedded {
    pub const ROUTE_MAP: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ResQroute - Distance: {{ distance_km }} km, ETA: {{ eta_minutes }} min</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body { height: 100%; margin: 0; }
        #map { height: 100%; width: 100%; }
        .route-info { background: #fff; padding: 6px 10px; border-radius: 4px; font: 14px Arial, sans-serif; }
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map("map").setView({{ center | json_encode() | safe }}, {{ zoom }});
        L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
            maxZoom: 19,
            attribution: "&copy; OpenStreetMap contributors"
        }).addTo(map);

        L.polyline({{ path | json_encode() | safe }}, {
            color: "green",
            weight: 5,
            opacity: 0.7{% if straight_line %},
            dashArray: "8 8"{% endif %}
        }).addTo(map);

        L.marker({{ source | json_encode() | safe }}).bindPopup("Source").addTo(map);
        L.marker({{ destination | json_encode() | safe }}).bindPopup("Destination").addTo(map);

        var info = L.control({ position: "topright" });
        info.onAdd = function () {
            var div = L.DomUtil.create("div", "route-info");
            div.innerHTML = "Distance: {{ distance_km }} km<br>ETA: {{ eta_minutes }} min";
            return div;
        };
        info.addTo(map);
    </script>
</body>
</html>
"#;
}

/// Template engine with the embedded route map page
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl TemplateEngine {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(ROUTE_MAP_TEMPLATE, embedded::ROUTE_MAP)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the route map page
    pub fn render_route_map(&self, view: &RouteMapView) -> Result<String, TemplateError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(ROUTE_MAP_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> RouteMapView {
        RouteMapView {
            center: [28.5, 77.1],
            zoom: 12,
            path: vec![[28.6139, 77.209], [28.5, 77.1], [28.4595, 77.0266]],
            source: [28.6139, 77.209],
            destination: [28.4595, 77.0266],
            distance_km: "32.15".to_string(),
            eta_minutes: "42.00".to_string(),
            straight_line: false,
        }
    }

    #[test]
    fn test_engine_compiles() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_route_map_contains_path_and_markers() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_route_map(&view()).unwrap();

        assert!(html.contains("setView([28.5,77.1], 12)"));
        assert!(html.contains("[[28.6139,77.209],[28.5,77.1],[28.4595,77.0266]]"));
        assert!(html.contains(r#"color: "green""#));
        assert!(html.contains("weight: 5"));
        assert!(html.contains("opacity: 0.7"));
        assert!(html.contains(r#"bindPopup("Source")"#));
        assert!(html.contains(r#"bindPopup("Destination")"#));
        assert!(html.contains("Distance: 32.15 km"));
        assert!(html.contains("ETA: 42.00 min"));
        assert!(!html.contains("dashArray"));
    }

    #[test]
    fn test_straight_line_is_dashed() {
        let engine = TemplateEngine::new().unwrap();
        let view = RouteMapView {
            straight_line: true,
            ..view()
        };
        assert!(engine.render_route_map(&view).unwrap().contains("dashArray"));
    }

    #[test]
    fn test_missing_template_error_maps_to_not_found() {
        let err = TemplateError::from(tera::Error::template_not_found("missing.html"));
        assert!(matches!(err, TemplateError::NotFound(name) if name == "missing.html"));
    }
}
