pub mod analysis;
pub mod coordinate;
pub mod units;

pub use analysis::{BoundingBox, Cluster, HeatmapCell, NearestResult};
pub use coordinate::Coordinate;
pub use units::{Distance, DistanceUnit};
