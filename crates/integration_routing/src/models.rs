//! Raw provider response structures
//!
//! Both providers answer with a `routes` array. MapmyIndia puts distance and
//! duration on the route itself; openrouteservice nests them in `summary`
//! and omits zero values.

use domain::{RouteGeometry, RouteSummary};
use serde::Deserialize;
use serde_json::Value;

use crate::RoutingError;

/// Top-level directions response
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub routes: Option<Vec<RawRoute>>,
}

/// One route candidate
#[derive(Debug, Deserialize)]
pub struct RawRoute {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub summary: Option<RawSummary>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

/// openrouteservice route summary
#[derive(Debug, Default, Deserialize)]
pub struct RawSummary {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

impl DirectionsResponse {
    /// First route, or `NoRoute` when the key is missing or the list empty
    pub fn into_first_route(self) -> Result<RawRoute, RoutingError> {
        self.routes
            .and_then(|routes| routes.into_iter().next())
            .ok_or(RoutingError::NoRoute)
    }
}

impl RawRoute {
    /// Convert using top-level `distance`/`duration`
    pub fn into_top_level_summary(self) -> Result<RouteSummary, RoutingError> {
        let distance = self
            .distance
            .ok_or_else(|| RoutingError::ParseError("route has no distance".to_string()))?;
        let duration = self
            .duration
            .ok_or_else(|| RoutingError::ParseError("route has no duration".to_string()))?;
        let geometry = parse_geometry(self.geometry.as_ref());
        Ok(RouteSummary::from_wire(distance, duration, geometry)?)
    }

    /// Convert using the nested `summary` block
    pub fn into_nested_summary(self) -> Result<RouteSummary, RoutingError> {
        let summary = self
            .summary
            .ok_or_else(|| RoutingError::ParseError("route has no summary".to_string()))?;
        let geometry = parse_geometry(self.geometry.as_ref());
        Ok(RouteSummary::from_wire(
            summary.distance,
            summary.duration,
            geometry,
        )?)
    }
}

/// Classify a raw `geometry` field
///
/// A string is an encoded path; a GeoJSON `LineString` object is a point
/// list (pairs kept in wire order, extra elevation values dropped). Anything
/// else, including a `LineString` with malformed coordinates, is unavailable.
#[must_use]
pub fn parse_geometry(value: Option<&Value>) -> RouteGeometry {
    match value {
        Some(Value::String(encoded)) => RouteGeometry::EncodedPath(encoded.clone()),
        Some(Value::Object(object))
            if object.get("type").and_then(Value::as_str) == Some("LineString") =>
        {
            object
                .get("coordinates")
                .and_then(Value::as_array)
                .and_then(|coordinates| {
                    coordinates
                        .iter()
                        .map(lng_lat_pair)
                        .collect::<Option<Vec<_>>>()
                })
                .map_or(RouteGeometry::Unavailable, RouteGeometry::PointList)
        },
        _ => RouteGeometry::Unavailable,
    }
}

fn lng_lat_pair(value: &Value) -> Option<[f64; 2]> {
    let pair = value.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some([pair[0].as_f64()?, pair[1].as_f64()?])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_geometry_is_encoded_path() {
        let value = json!("_p~iF~ps|U_ulLnnqC");
        assert_eq!(
            parse_geometry(Some(&value)),
            RouteGeometry::EncodedPath("_p~iF~ps|U_ulLnnqC".to_string())
        );
    }

    #[test]
    fn test_linestring_geometry_is_point_list() {
        let value = json!({
            "type": "LineString",
            "coordinates": [[77.209, 28.6139], [77.1, 28.5, 212.0]]
        });
        assert_eq!(
            parse_geometry(Some(&value)),
            RouteGeometry::PointList(vec![[77.209, 28.6139], [77.1, 28.5]])
        );
    }

    #[test]
    fn test_malformed_linestring_is_unavailable() {
        let value = json!({ "type": "LineString", "coordinates": [[77.2], [77.1, 28.5]] });
        assert_eq!(parse_geometry(Some(&value)), RouteGeometry::Unavailable);

        let value = json!({ "type": "LineString" });
        assert_eq!(parse_geometry(Some(&value)), RouteGeometry::Unavailable);
    }

    #[test]
    fn test_other_geometry_is_unavailable() {
        assert_eq!(parse_geometry(None), RouteGeometry::Unavailable);
        assert_eq!(parse_geometry(Some(&Value::Null)), RouteGeometry::Unavailable);
        assert_eq!(parse_geometry(Some(&json!(42))), RouteGeometry::Unavailable);
        let point = json!({ "type": "Point", "coordinates": [77.2, 28.6] });
        assert_eq!(parse_geometry(Some(&point)), RouteGeometry::Unavailable);
    }

    #[test]
    fn test_top_level_summary_conversion() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "routes": [{ "distance": 10000.0, "duration": 600.0, "geometry": "??" }]
        }))
        .unwrap();
        let summary = response
            .into_first_route()
            .unwrap()
            .into_top_level_summary()
            .unwrap();
        assert!((summary.distance_km() - 10.0).abs() < 1e-9);
        assert!((summary.eta_minutes() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_nested_summary_defaults_missing_values() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "routes": [{ "summary": {}, "geometry": null }]
        }))
        .unwrap();
        let summary = response
            .into_first_route()
            .unwrap()
            .into_nested_summary()
            .unwrap();
        assert!(summary.distance_km().abs() < f64::EPSILON);
        assert_eq!(summary.geometry(), &RouteGeometry::Unavailable);
    }

    #[test]
    fn test_missing_routes_key() {
        let response: DirectionsResponse =
            serde_json::from_value(json!({ "code": "InvalidKey" })).unwrap();
        assert!(matches!(response.into_first_route(), Err(RoutingError::NoRoute)));
    }

    #[test]
    fn test_empty_routes() {
        let response: DirectionsResponse = serde_json::from_value(json!({ "routes": [] })).unwrap();
        assert!(matches!(response.into_first_route(), Err(RoutingError::NoRoute)));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "routes": [{ "distance": -5.0, "duration": 60.0 }]
        }))
        .unwrap();
        let result = response.into_first_route().unwrap().into_top_level_summary();
        assert!(matches!(result, Err(RoutingError::InvalidRoute(_))));
    }
}
