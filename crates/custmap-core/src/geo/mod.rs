//! Geo module for customer location analysis
//!
//! Stateless functions over coordinate slices: validation, formatting,
//! measurement, proximity clustering and heatmap aggregation. Nothing here
//! keeps state between calls or holds on to its inputs.

pub mod cluster;
pub mod heatmap;
pub mod measure;
pub mod validation;

// Re-export key functions for convenience
pub use cluster::{cluster, DEFAULT_CLUSTER_RADIUS_METERS};
pub use heatmap::{heatmap, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
pub use measure::{
    bounding_box, centroid, distance_meters, nearest, polygon_area, within_radius,
    EARTH_RADIUS_METERS, SQ_KM_PER_SQ_DEGREE,
};
pub use validation::{format_coordinate, is_valid_coordinate, AsDegrees};
