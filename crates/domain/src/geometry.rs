//! Route geometry normalization
//!
//! Turns whatever a routing provider returned into an ordered list of
//! [`GeoLocation`]s in `(latitude, longitude)` order. Normalization never
//! fails: when the geometry is missing, undecodable, or contains an invalid
//! point, the path collapses to the straight `[source, destination]` segment
//! and the reason is reported through [`NormalizedPath::fallback`].
//!
//! The encoded form is the common 5-digit polyline algorithm: each value is a
//! zigzag-encoded delta of `round(coordinate * 1e5)`, split into 5-bit chunks
//! offset by 63, with `0x20` marking continuation.

use thiserror::Error;

use crate::entities::RouteGeometry;
use crate::value_objects::GeoLocation;

const PRECISION: f64 = 1e5;
const CHAR_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION: i64 = 0x20;
/// Beyond this shift another chunk could overflow an `i64`
const MAX_SHIFT: u32 = 60;

/// Failure decoding an encoded polyline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// Byte outside the printable range `'?'..='~'`
    #[error("invalid polyline character {character:?} at byte {index}")]
    InvalidCharacter {
        /// Offending character (lossy for non-ASCII input)
        character: char,
        /// Byte offset in the input
        index: usize,
    },

    /// Input ended inside a value that still expected continuation chunks
    #[error("polyline truncated at byte {0}")]
    Truncated(usize),

    /// Odd number of values, so the last latitude has no longitude
    #[error("polyline has a latitude without a longitude")]
    UnpairedValue,

    /// Decoded point lies outside valid latitude/longitude ranges
    #[error("decoded point {0} is out of range")]
    OutOfRange(usize),

    /// Value too long to fit the accumulator
    #[error("polyline value overflows at byte {0}")]
    Overflow(usize),
}

/// Why the normalizer fell back to the straight source-destination segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathFallback {
    /// Provider returned no geometry
    #[error("route geometry unavailable")]
    Unavailable,

    /// Encoded path could not be decoded
    #[error("failed to decode route geometry: {0}")]
    Decode(#[from] PolylineError),

    /// A point in the expanded list was out of range or not finite
    #[error("route geometry point {0} is invalid")]
    InvalidPoint(usize),

    /// Geometry decoded to zero points
    #[error("route geometry has no points")]
    Empty,
}

/// Renderable path: at least one point, usually two or more
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPath {
    points: Vec<GeoLocation>,
    fallback: Option<PathFallback>,
}

impl NormalizedPath {
    fn straight(endpoints: [GeoLocation; 2], reason: PathFallback) -> Self {
        Self {
            points: endpoints.to_vec(),
            fallback: Some(reason),
        }
    }

    /// Ordered path points in `(latitude, longitude)` form
    #[must_use]
    pub fn points(&self) -> &[GeoLocation] {
        &self.points
    }

    /// Consume the path, keeping only its points
    #[must_use]
    pub fn into_points(self) -> Vec<GeoLocation> {
        self.points
    }

    /// Reason the provider geometry was replaced, if it was
    #[must_use]
    pub const fn fallback(&self) -> Option<PathFallback> {
        self.fallback
    }

    /// Whether this is the two-point replacement segment
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Point used to center a map on this path
    ///
    /// Never `None` for a normalized path.
    #[must_use]
    pub fn midpoint(&self) -> Option<GeoLocation> {
        midpoint(&self.points)
    }
}

/// Normalize provider geometry into an ordered list of points
///
/// `endpoints` is `[source, destination]` and becomes the path whenever the
/// geometry cannot be used.
#[must_use]
pub fn normalize(geometry: &RouteGeometry, endpoints: [GeoLocation; 2]) -> NormalizedPath {
    let decoded = match geometry {
        RouteGeometry::Unavailable => Err(PathFallback::Unavailable),
        RouteGeometry::EncodedPath(encoded) => decode_polyline(encoded).map_err(PathFallback::from),
        RouteGeometry::PointList(pairs) => from_lng_lat_pairs(pairs),
    };

    match decoded {
        Ok(points) if points.is_empty() => NormalizedPath::straight(endpoints, PathFallback::Empty),
        Ok(points) => NormalizedPath {
            points,
            fallback: None,
        },
        Err(reason) => NormalizedPath::straight(endpoints, reason),
    }
}

/// Element at index `len / 2`, `None` for an empty slice
///
/// For even lengths this is the upper of the two middle elements.
#[must_use]
pub fn midpoint(points: &[GeoLocation]) -> Option<GeoLocation> {
    points.get(points.len() / 2).copied()
}

fn from_lng_lat_pairs(pairs: &[[f64; 2]]) -> Result<Vec<GeoLocation>, PathFallback> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            GeoLocation::from_lng_lat(*pair).map_err(|_| PathFallback::InvalidPoint(index))
        })
        .collect()
}

/// Decode a 5-digit polyline into `(latitude, longitude)` points
///
/// An empty string decodes to an empty list.
///
/// # Errors
///
/// Returns a [`PolylineError`] for characters outside `'?'..='~'`, a value cut
/// off mid-sequence, an unpaired trailing latitude, an accumulator overflow,
/// or a decoded point outside valid coordinate ranges.
pub fn decode_polyline(encoded: &str) -> Result<Vec<GeoLocation>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut values = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let mut result: i64 = 0;
        let mut shift: u32 = 0;
        loop {
            let Some(&byte) = bytes.get(index) else {
                return Err(PolylineError::Truncated(index));
            };
            if !(CHAR_OFFSET..=126).contains(&byte) {
                return Err(PolylineError::InvalidCharacter {
                    character: char::from(byte),
                    index,
                });
            }
            if shift > MAX_SHIFT {
                return Err(PolylineError::Overflow(index));
            }
            let chunk = i64::from(byte - CHAR_OFFSET);
            result |= (chunk & CHUNK_MASK) << shift;
            shift += CHUNK_BITS;
            index += 1;
            if chunk < CONTINUATION {
                break;
            }
        }
        let delta = if result & 1 == 0 {
            result >> 1
        } else {
            !(result >> 1)
        };
        values.push(delta);
    }

    if values.len() % 2 != 0 {
        return Err(PolylineError::UnpairedValue);
    }

    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut points = Vec::with_capacity(values.len() / 2);
    for (point, pair) in values.chunks_exact(2).enumerate() {
        latitude = latitude
            .checked_add(pair[0])
            .ok_or(PolylineError::OutOfRange(point))?;
        longitude = longitude
            .checked_add(pair[1])
            .ok_or(PolylineError::OutOfRange(point))?;
        #[allow(clippy::cast_precision_loss)]
        let location =
            GeoLocation::new(latitude as f64 / PRECISION, longitude as f64 / PRECISION)
                .map_err(|_| PolylineError::OutOfRange(point))?;
        points.push(location);
    }
    Ok(points)
}

/// Encode points as a 5-digit polyline
#[must_use]
pub fn encode_polyline(points: &[GeoLocation]) -> String {
    let mut encoded = String::new();
    let mut previous = [0_i64; 2];
    for point in points {
        let current = [scaled(point.latitude()), scaled(point.longitude())];
        for (value, last) in current.iter().zip(previous) {
            encode_value(value - last, &mut encoded);
        }
        previous = current;
    }
    encoded
}

#[allow(clippy::cast_possible_truncation)]
fn scaled(coordinate: f64) -> i64 {
    (coordinate * PRECISION).round() as i64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_value(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= CONTINUATION {
        out.push(char::from(((CONTINUATION | (value & CHUNK_MASK)) as u8) + CHAR_OFFSET));
        value >>= CHUNK_BITS;
    }
    out.push(char::from((value as u8) + CHAR_OFFSET));
}
