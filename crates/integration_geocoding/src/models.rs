//! Raw provider response structures

use domain::GeoLocation;
use serde::Deserialize;

use crate::GeocodingError;

/// A coordinate component sent either as a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    /// `28.61`
    Number(f64),
    /// `"28.61"`
    Text(String),
}

impl Degrees {
    /// Numeric value, if the text form parses
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Build a validated location from raw latitude/longitude fields
pub fn to_location(
    latitude: Option<&Degrees>,
    longitude: Option<&Degrees>,
) -> Result<GeoLocation, GeocodingError> {
    let latitude = latitude
        .and_then(Degrees::value)
        .ok_or_else(|| GeocodingError::ParseError("Invalid latitude".to_string()))?;
    let longitude = longitude
        .and_then(Degrees::value)
        .ok_or_else(|| GeocodingError::ParseError("Invalid longitude".to_string()))?;
    GeoLocation::new(latitude, longitude).map_err(|e| GeocodingError::ParseError(e.to_string()))
}

/// Mappls geocode response
#[derive(Debug, Deserialize)]
pub struct MapplsResponse {
    #[serde(default)]
    pub results: Vec<MapplsResult>,
}

/// One Mappls candidate
#[derive(Debug, Deserialize)]
pub struct MapplsResult {
    pub latitude: Option<Degrees>,
    pub longitude: Option<Degrees>,
}

/// One Nominatim search candidate
#[derive(Debug, Deserialize)]
pub struct NominatimResult {
    pub lat: Degrees,
    pub lon: Degrees,
    #[serde(default)]
    pub display_name: Option<String>,
}
