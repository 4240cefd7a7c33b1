//! The latitude/longitude record every geo-analysis function operates on.

use crate::error::{CustmapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WGS 84 position in decimal degrees.
///
/// No range checks happen on construction; use [`Coordinate::is_valid`] when
/// the values come from untrusted records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when both axes are finite and inside their WGS 84 ranges
    pub fn is_valid(&self) -> bool {
        crate::geo::is_valid_coordinate(self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::geo::format_coordinate(self.latitude, self.longitude))
    }
}

/// Parses `"lat,lng"` (whitespace around either part is ignored).
impl FromStr for Coordinate {
    type Err = CustmapError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| CustmapError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lng) = s.split_once(',').ok_or_else(|| invalid("expected 'lat,lng'"))?;
        let latitude: f64 =
            lat.trim().parse().map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 =
            lng.trim().parse().map_err(|_| invalid("longitude is not a number"))?;

        Ok(Self::new(latitude, longitude))
    }
}

// geo uses x = longitude, y = latitude
impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.longitude, coord.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Coord { x: coord.longitude, y: coord.latitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_lng() {
        let coord: Coordinate = "-8.5069, 115.2625".parse().unwrap();
        assert_eq!(coord, Coordinate::new(-8.5069, 115.2625));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("-8.5".parse::<Coordinate>().is_err());
        assert!("north,115".parse::<Coordinate>().is_err());
        assert!("-8.5,east".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_geo_point_axis_order() {
        let coord = Coordinate::new(-8.5, 115.0);
        let point: geo::Point<f64> = coord.into();
        assert_eq!(point.x(), 115.0);
        assert_eq!(point.y(), -8.5);

        let back: Coordinate = point.into();
        assert_eq!(back, coord);
    }

    #[test]
    fn test_display_uses_hemispheres() {
        let coord = Coordinate::new(-8.5, 115.25);
        assert_eq!(coord.to_string(), "8.500000° S, 115.250000° E");
    }

    #[test]
    fn test_serializes_plain_fields() {
        let json = serde_json::to_value(Coordinate::new(1.0, 2.0)).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 1.0, "longitude": 2.0}));
    }
}
