//! Distances, extents and areas over coordinate slices.

use crate::models::{BoundingBox, Coordinate, NearestResult};
use geo::algorithm::area::Area;
use geo::algorithm::bounding_rect::BoundingRect;
use geo::algorithm::centroid::Centroid;
use geo::{LineString, MultiPoint, Point, Polygon};

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Square kilometers per square degree (111 km per degree, squared)
pub const SQ_KM_PER_SQ_DEGREE: f64 = 12_321.0;

/// Great-circle distance between two coordinates in meters (haversine).
///
/// The intermediate term is clamped to [0, 1] so rounding near antipodal or
/// identical points cannot push `asin` out of its domain.
// Not geo::Haversine: that uses a 6,371,008.8 m radius and does not clamp.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_METERS * c
}

fn multi_point(coordinates: &[Coordinate]) -> MultiPoint<f64> {
    MultiPoint::new(coordinates.iter().map(|&coord| Point::from(coord)).collect())
}

/// Min/max latitude and longitude over all coordinates, `None` when empty
pub fn bounding_box(coordinates: &[Coordinate]) -> Option<BoundingBox> {
    multi_point(coordinates).bounding_rect().map(BoundingBox::from)
}

/// Arithmetic mean of latitudes and longitudes, `None` when empty.
///
/// This is a planar approximation, not a geodesic centroid: it is fine for
/// a city's worth of customers and wrong across the antimeridian.
pub fn centroid(coordinates: &[Coordinate]) -> Option<Coordinate> {
    multi_point(coordinates).centroid().map(Coordinate::from)
}

/// Approximate area in square kilometers of the polygon traced by
/// `coordinates` in order.
///
/// Planar area in degree space (x = longitude, y = latitude) scaled by
/// [`SQ_KM_PER_SQ_DEGREE`]. The points are not sorted or hulled, so the
/// result only means something for a simple polygon boundary. The fixed
/// scale holds near the equator; large or high-latitude areas are
/// overestimated.
pub fn polygon_area(coordinates: &[Coordinate]) -> f64 {
    if coordinates.len() < 3 {
        return 0.0;
    }

    let ring: LineString<f64> = coordinates.iter().map(|&coord| geo::Coord::from(coord)).collect();
    Polygon::new(ring, vec![]).unsigned_area() * SQ_KM_PER_SQ_DEGREE
}

/// Closest candidate to `target`, `None` when there are no candidates.
///
/// Equal distances resolve to the earliest candidate. Candidates whose
/// distance is NaN lose to any finite distance.
pub fn nearest(target: &Coordinate, coordinates: &[Coordinate]) -> Option<NearestResult> {
    let mut best: Option<NearestResult> = None;

    for coord in coordinates {
        let distance = distance_meters(target, coord);
        let closer = match &best {
            None => true,
            Some(current) => {
                distance < current.distance_meters
                    || (current.distance_meters.is_nan() && !distance.is_nan())
            }
        };
        if closer {
            best = Some(NearestResult { coordinate: *coord, distance_meters: distance });
        }
    }

    best
}

/// Every candidate within `radius_meters` (inclusive) of `target`, in input
/// order
pub fn within_radius(
    target: &Coordinate,
    coordinates: &[Coordinate],
    radius_meters: f64,
) -> Vec<NearestResult> {
    coordinates
        .iter()
        .filter_map(|coord| {
            let distance = distance_meters(target, coord);
            (distance <= radius_meters)
                .then_some(NearestResult { coordinate: *coord, distance_meters: distance })
        })
        .collect()
}
