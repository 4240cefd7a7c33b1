use custmap_core::{BoundingBox, Cluster, Coordinate, HeatmapCell, NearestResult};
use serde::Serialize;

/// Output for validate command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    pub latitude: String,
    pub longitude: String,
    pub valid: bool,
}

/// Output for format command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOutput {
    pub formatted: String,
}

/// Output for distance command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceOutput {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance_meters: f64,
    pub distance: f64,
    pub unit: String,
}

/// Output for bbox command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBoxOutput {
    pub point_count: usize,
    pub bounding_box: Option<BoundingBox>,
}

/// Output for centroid command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CentroidOutput {
    pub point_count: usize,
    pub centroid: Option<Coordinate>,
    pub formatted: Option<String>,
}

/// Output for area command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOutput {
    pub point_count: usize,
    pub area_sq_km: f64,
}

/// Output for cluster command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOutput {
    pub point_count: usize,
    pub radius_meters: f64,
    pub clusters: Vec<Cluster>,
}

/// Output for nearest command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestOutput {
    pub target: Coordinate,
    pub nearest: Option<NearestResult>,
    pub within: Option<WithinOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithinOutput {
    pub radius_meters: f64,
    pub matches: Vec<NearestResult>,
}

/// Output for heatmap command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOutput {
    pub point_count: usize,
    pub grid_size: f64,
    pub cells: Vec<HeatmapCell>,
}

/// Output for config command
///
/// Keys match the names used in `custmap.toml`.
#[derive(Debug, Serialize)]
pub struct InspectConfigOutput {
    pub cluster_radius: ConfigValue<f64>,
    pub heatmap_grid_size: ConfigValue<f64>,
    pub distance_unit: ConfigValue<String>,
    pub skip_invalid: ConfigValue<bool>,
}

#[derive(Debug, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: String,
}
