//! Greedy proximity clustering of customer locations.
//!
//! Each unassigned point, taken in input order, seeds a cluster and claims
//! every later unassigned point within the radius of the *seed*. Assignments
//! are final, so the grouping depends on input order. Callers rely on this
//! exact behaviour; it is not meant to be an optimal clustering.

use super::measure::{centroid, distance_meters};
use crate::models::{Cluster, Coordinate};

/// Radius used by the map view when none is configured
pub const DEFAULT_CLUSTER_RADIUS_METERS: f64 = 1000.0;

/// Group coordinates that lie within `radius_meters` (inclusive) of a seed.
///
/// Clusters come back ordered by descending member count; clusters of equal
/// size keep the order in which their seeds appeared. This is O(n²) with no
/// spatial index, intended for hundreds of points.
pub fn cluster(coordinates: &[Coordinate], radius_meters: f64) -> Vec<Cluster> {
    let mut assigned = vec![false; coordinates.len()];
    let mut clusters = Vec::new();

    for (i, seed) in coordinates.iter().enumerate() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;

        let mut members = vec![*seed];
        for (j, candidate) in coordinates.iter().enumerate().skip(i + 1) {
            if !assigned[j] && distance_meters(seed, candidate) <= radius_meters {
                assigned[j] = true;
                members.push(*candidate);
            }
        }

        let center = centroid(&members).unwrap_or(*seed);
        clusters.push(Cluster {
            latitude: center.latitude,
            longitude: center.longitude,
            count: members.len(),
            members,
        });
    }

    // Stable sort keeps seed order among equal counts
    clusters.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(
        points = coordinates.len(),
        clusters = clusters.len(),
        radius_meters,
        "Clustered coordinates"
    );

    clusters
}
