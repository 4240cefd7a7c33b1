//! Grid aggregation of coordinates for heatmap layers.
//!
//! Coordinates are scaled to micro-degrees (the six-decimal encoding customer
//! records are stored with) and floored onto a square grid whose cell edge is
//! `grid_size` micro-degrees on both axes. Each occupied cell reports its
//! centre and the number of points that fell into it.

use crate::models::{Coordinate, HeatmapCell};
use std::collections::BTreeMap;

/// Cell edge used by the map view when none is configured
pub const DEFAULT_GRID_SIZE: f64 = 500.0;

/// Smallest usable cell edge: one micro-degree, the precision records are
/// stored with. Finer grids would overflow the cell index.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Micro-degrees per degree
const COORDINATE_SCALE: f64 = 1_000_000.0;

/// Aggregate coordinates into occupied grid cells.
///
/// Cells are returned ordered by latitude band, then longitude band. A grid
/// size that is not finite or is below [`MIN_GRID_SIZE`] falls back to
/// [`DEFAULT_GRID_SIZE`]. Coordinates with non-finite values cannot be placed
/// on the grid and are left out.
pub fn heatmap(coordinates: &[Coordinate], grid_size: f64) -> Vec<HeatmapCell> {
    let grid_size = if grid_size.is_finite() && grid_size >= MIN_GRID_SIZE {
        grid_size
    } else {
        tracing::warn!(grid_size, fallback = DEFAULT_GRID_SIZE, "Unusable heatmap grid size");
        DEFAULT_GRID_SIZE
    };

    let mut cells: BTreeMap<(i64, i64), usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for coord in coordinates {
        if !coord.latitude.is_finite() || !coord.longitude.is_finite() {
            skipped += 1;
            continue;
        }
        let key = (cell_index(coord.latitude, grid_size), cell_index(coord.longitude, grid_size));
        *cells.entry(key).or_insert(0) += 1;
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Left non-finite coordinates out of heatmap");
    }

    cells
        .into_iter()
        .map(|((lat_idx, lng_idx), intensity)| HeatmapCell {
            latitude: cell_center(lat_idx, grid_size),
            longitude: cell_center(lng_idx, grid_size),
            intensity,
        })
        .collect()
}

fn cell_index(degrees: f64, grid_size: f64) -> i64 {
    (degrees * COORDINATE_SCALE / grid_size).floor() as i64
}

fn cell_center(index: i64, grid_size: f64) -> f64 {
    (index as f64 + 0.5) * grid_size / COORDINATE_SCALE
}
