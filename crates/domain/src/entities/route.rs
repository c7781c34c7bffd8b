//! Route entities
//!
//! A routing provider yields a [`RouteSummary`] (metrics plus raw geometry);
//! the orchestrator attaches the two resolved coordinates to form a
//! [`RouteResult`], which the renderer consumes exactly once.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Route geometry exactly as a provider returned it
///
/// Exactly one representation is active. Decoding into points happens later,
/// in [`crate::geometry::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RouteGeometry {
    /// Compact polyline string (precision 1e-5)
    EncodedPath(String),
    /// Expanded point list, each pair in wire order `[longitude, latitude]`
    PointList(Vec<[f64; 2]>),
    /// Provider returned no usable geometry
    Unavailable,
}

impl RouteGeometry {
    /// Short label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EncodedPath(_) => "encoded_path",
            Self::PointList(_) => "point_list",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Distance, travel time and geometry of one route, without its endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    distance_km: f64,
    eta_minutes: f64,
    geometry: RouteGeometry,
}

impl RouteSummary {
    /// Build a summary from provider-native units (meters and seconds)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRouteMetric` if either value is negative
    /// or not finite.
    pub fn from_wire(
        distance_m: f64,
        duration_s: f64,
        geometry: RouteGeometry,
    ) -> Result<Self, DomainError> {
        if !distance_m.is_finite() || distance_m < 0.0 {
            return Err(DomainError::invalid_metric("distance", distance_m));
        }
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(DomainError::invalid_metric("duration", duration_s));
        }
        Ok(Self {
            distance_km: distance_m / METERS_PER_KM,
            eta_minutes: duration_s / SECONDS_PER_MINUTE,
            geometry,
        })
    }

    /// Route length in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Travel time in minutes
    #[must_use]
    pub const fn eta_minutes(&self) -> f64 {
        self.eta_minutes
    }

    /// Raw provider geometry
    #[must_use]
    pub const fn geometry(&self) -> &RouteGeometry {
        &self.geometry
    }
}

/// A fully resolved route: summary plus the geocoded endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    summary: RouteSummary,
    source: GeoLocation,
    destination: GeoLocation,
}

impl RouteResult {
    /// Attach resolved endpoints to a routing summary
    #[must_use]
    pub const fn new(summary: RouteSummary, source: GeoLocation, destination: GeoLocation) -> Self {
        Self {
            summary,
            source,
            destination,
        }
    }

    /// Route length in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.summary.distance_km
    }

    /// Travel time in minutes
    #[must_use]
    pub const fn eta_minutes(&self) -> f64 {
        self.summary.eta_minutes
    }

    /// Raw provider geometry
    #[must_use]
    pub const fn geometry(&self) -> &RouteGeometry {
        &self.summary.geometry
    }

    /// Geocoded origin
    #[must_use]
    pub const fn source(&self) -> GeoLocation {
        self.source
    }

    /// Geocoded destination
    #[must_use]
    pub const fn destination(&self) -> GeoLocation {
        self.destination
    }

    /// Endpoints as the two-point fallback path
    #[must_use]
    pub const fn endpoints(&self) -> [GeoLocation; 2] {
        [self.source, self.destination]
    }

    /// One-line distance/time report, two decimals each
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "Distance: {:.2} km, ETA: {:.2} min",
            self.distance_km(),
            self.eta_minutes()
        )
    }
}
