//! Property tests for the geo-analysis functions
//!
//! These check the numeric guarantees callers rely on: validity bounds,
//! distance symmetry, clustering partitions and heatmap totals.

use custmap_core::geo::{
    bounding_box, centroid, cluster, distance_meters, heatmap, is_valid_coordinate, nearest,
    polygon_area, SQ_KM_PER_SQ_DEGREE,
};
use custmap_core::Coordinate;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn local_coordinates(max: usize) -> impl Strategy<Value = Vec<Coordinate>> {
    // A small town's worth of customers around Ubud
    prop::collection::vec(
        (-8.55f64..-8.45, 115.20f64..115.30).prop_map(|(lat, lng)| Coordinate::new(lat, lng)),
        0..max,
    )
}

proptest! {
    #[test]
    fn in_range_coordinates_are_valid(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        prop_assert!(is_valid_coordinate(lat, lng));
    }

    #[test]
    fn one_unit_outside_is_invalid(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        prop_assert!(!is_valid_coordinate(91.0, lng));
        prop_assert!(!is_valid_coordinate(-91.0, lng));
        prop_assert!(!is_valid_coordinate(lat, 181.0));
        prop_assert!(!is_valid_coordinate(lat, -181.0));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance_meters(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = distance_meters(&a, &b);
        let ba = distance_meters(&b, &a);
        prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = distance_meters(&a, &b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * 6_371_000.0 + 1e-6);
    }

    #[test]
    fn bounding_box_contains_every_point(points in prop::collection::vec(coordinate(), 1..40)) {
        let bbox = bounding_box(&points).unwrap();
        for p in &points {
            prop_assert!(bbox.contains(p));
        }
    }

    #[test]
    fn centroid_lies_in_bounding_box(points in prop::collection::vec(coordinate(), 1..40)) {
        let bbox = bounding_box(&points).unwrap();
        let center = centroid(&points).unwrap();
        let eps = 1e-9;
        prop_assert!(center.latitude >= bbox.min_lat - eps && center.latitude <= bbox.max_lat + eps);
        prop_assert!(center.longitude >= bbox.min_lng - eps && center.longitude <= bbox.max_lng + eps);
    }

    #[test]
    fn clusters_partition_input(points in local_coordinates(60), radius in 0.0f64..5_000.0) {
        let clusters = cluster(&points, radius);

        let total: usize = clusters.iter().map(|c| c.count).sum();
        prop_assert_eq!(total, points.len());

        for window in clusters.windows(2) {
            prop_assert!(window[0].count >= window[1].count);
        }

        for c in &clusters {
            prop_assert!(c.count >= 1);
            prop_assert_eq!(c.count, c.members.len());
            let seed = c.members[0];
            for member in &c.members {
                prop_assert!(distance_meters(&seed, member) <= radius);
            }
        }
    }

    #[test]
    fn spanning_radius_gives_single_cluster(points in local_coordinates(40)) {
        prop_assume!(!points.is_empty());
        let clusters = cluster(&points, 100_000.0);
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(clusters[0].count, points.len());
    }

    #[test]
    fn nearest_is_minimum(target in coordinate(), points in prop::collection::vec(coordinate(), 1..30)) {
        let result = nearest(&target, &points).unwrap();
        for p in &points {
            prop_assert!(result.distance_meters <= distance_meters(&target, p));
        }
    }

    #[test]
    fn repeated_point_single_heatmap_cell(
        point in coordinate(),
        n in 1usize..50,
        grid in 1.0f64..100_000.0,
    ) {
        let cells = heatmap(&vec![point; n], grid);
        prop_assert_eq!(cells.len(), 1);
        prop_assert_eq!(cells[0].intensity, n);
    }

    #[test]
    fn heatmap_intensity_totals_input(points in local_coordinates(80), grid in 10.0f64..5_000.0) {
        let cells = heatmap(&points, grid);
        prop_assert_eq!(cells.iter().map(|c| c.intensity).sum::<usize>(), points.len());
        for cell in &cells {
            prop_assert!(cell.intensity >= 1);
        }
    }

    #[test]
    fn axis_aligned_rectangle_area(
        lat in -10.0f64..10.0,
        lng in -10.0f64..10.0,
        h in 0.01f64..2.0,
        w in 0.01f64..2.0,
    ) {
        let rect = [
            Coordinate::new(lat, lng),
            Coordinate::new(lat, lng + w),
            Coordinate::new(lat + h, lng + w),
            Coordinate::new(lat + h, lng),
        ];
        let expected = h * w * SQ_KM_PER_SQ_DEGREE;
        prop_assert!((polygon_area(&rect) - expected).abs() <= 1e-6 * expected.max(1.0));
    }
}

#[test]
fn test_examples_from_the_map_view() {
    let origin = Coordinate::new(0.0, 0.0);

    let d = distance_meters(&origin, &Coordinate::new(0.0, 1.0));
    assert!((d - 111_195.0).abs() / 111_195.0 < 0.01);

    assert!(bounding_box(&[]).is_none());
    assert_eq!(
        centroid(&[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 2.0)]),
        Some(Coordinate::new(0.0, 1.0))
    );

    let result =
        nearest(&origin, &[Coordinate::new(0.0, 1.0), Coordinate::new(0.0, 5.0)]).unwrap();
    assert_eq!(result.coordinate, Coordinate::new(0.0, 1.0));

    assert!(heatmap(&[], 500.0).is_empty());
    assert_eq!(polygon_area(&[origin, Coordinate::new(1.0, 1.0)]), 0.0);
}
