//! Derived artifacts returned by the geo-analysis functions.
//!
//! Field names serialize in camelCase so the structures can be handed to the
//! mapping front-end as-is.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of a non-empty coordinate set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Inclusive containment check
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.latitude >= self.min_lat
            && coord.latitude <= self.max_lat
            && coord.longitude >= self.min_lng
            && coord.longitude <= self.max_lng
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new((self.min_lat + self.max_lat) / 2.0, (self.min_lng + self.max_lng) / 2.0)
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        }
    }
}

impl From<BoundingBox> for geo::Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        geo::Rect::new(
            geo::Coord { x: bbox.min_lng, y: bbox.min_lat },
            geo::Coord { x: bbox.max_lng, y: bbox.max_lat },
        )
    }
}

/// A proximity group of coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Mean latitude of the members
    pub latitude: f64,
    /// Mean longitude of the members
    pub longitude: f64,
    pub count: usize,
    /// Members in input order, seed first
    pub members: Vec<Coordinate>,
}

impl Cluster {
    pub fn centroid(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// One occupied grid cell of a heatmap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// Cell centre latitude
    pub latitude: f64,
    /// Cell centre longitude
    pub longitude: f64,
    pub intensity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestResult {
    pub coordinate: Coordinate,
    pub distance_meters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_contains_and_center() {
        let bbox = BoundingBox { min_lat: -1.0, max_lat: 1.0, min_lng: 2.0, max_lng: 4.0 };
        assert!(bbox.contains(&Coordinate::new(0.0, 3.0)));
        assert!(bbox.contains(&Coordinate::new(1.0, 4.0)));
        assert!(!bbox.contains(&Coordinate::new(0.0, 5.0)));
        assert_eq!(bbox.center(), Coordinate::new(0.0, 3.0));
    }

    #[test]
    fn test_bounding_box_to_rect() {
        let bbox = BoundingBox { min_lat: -8.6, max_lat: -8.4, min_lng: 115.1, max_lng: 115.3 };
        let rect: geo::Rect<f64> = bbox.into();
        assert_eq!(rect.min().x, 115.1);
        assert_eq!(rect.min().y, -8.6);
        assert_eq!(rect.max().x, 115.3);
        assert_eq!(rect.max().y, -8.4);
        assert_eq!(BoundingBox::from(rect), bbox);
    }

    #[test]
    fn test_camel_case_field_names() {
        let bbox = BoundingBox { min_lat: 1.0, max_lat: 1.0, min_lng: 2.0, max_lng: 2.0 };
        let json = serde_json::to_value(bbox).unwrap();
        assert!(json.get("minLat").is_some());
        assert!(json.get("maxLng").is_some());

        let nearest = NearestResult { coordinate: Coordinate::new(0.0, 1.0), distance_meters: 5.0 };
        let json = serde_json::to_value(nearest).unwrap();
        assert_eq!(json["distanceMeters"], 5.0);
    }
}
