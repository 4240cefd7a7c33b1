use clap::{Parser, Subcommand};
use custmap_core::Coordinate;
use std::path::PathBuf;

/// Custmap - customer location analysis for the coverage map
#[derive(Parser, Debug)]
#[command(name = "custmap")]
#[command(about = "Customer location analysis for the coverage map", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./custmap.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Unit for reported distances (meters, kilometers, miles, feet)
    #[arg(long, global = true, value_name = "UNIT")]
    pub unit: Option<String>,

    /// Fail on records without a valid coordinate instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a latitude/longitude pair is a valid position
    Validate(CoordinateArgs),

    /// Format a latitude/longitude pair for display
    Format(CoordinateArgs),

    /// Great-circle distance between two positions
    Distance(DistanceArgs),

    /// Bounding box of the customer locations in a file
    Bbox(BboxArgs),

    /// Planar centroid of the customer locations in a file
    Centroid(InputArgs),

    /// Approximate area of the polygon traced by the locations, in order
    Area(InputArgs),

    /// Group customer locations into proximity clusters
    Cluster(ClusterArgs),

    /// Find the customer closest to a position
    Nearest(NearestArgs),

    /// Aggregate customer locations into heatmap cells
    Heatmap(HeatmapArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct CoordinateArgs {
    /// Latitude in decimal degrees
    #[arg(allow_hyphen_values = true)]
    pub latitude: String,

    /// Longitude in decimal degrees
    #[arg(allow_hyphen_values = true)]
    pub longitude: String,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    /// Start position as "lat,lng"
    #[arg(allow_hyphen_values = true)]
    pub from: Coordinate,

    /// End position as "lat,lng"
    #[arg(allow_hyphen_values = true)]
    pub to: Coordinate,
}

#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Customer locations (.json records or .geojson points)
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct BboxArgs {
    /// Customer locations (.json records or .geojson points)
    pub input: PathBuf,

    /// Emit the box as a GeoJSON Polygon feature
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct ClusterArgs {
    /// Customer locations (.json records or .geojson points)
    pub input: PathBuf,

    /// Cluster radius (e.g., "1km", "500m"); overrides the configured value
    #[arg(long, short = 'r')]
    pub radius: Option<String>,

    /// Emit a GeoJSON layer of cluster centroids
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct NearestArgs {
    /// Customer locations (.json records or .geojson points)
    pub input: PathBuf,

    /// Position to search from, as "lat,lng"
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub target: Coordinate,

    /// Also list every customer within this distance (e.g., "2km")
    #[arg(long)]
    pub within: Option<String>,
}

#[derive(Parser, Debug)]
pub struct HeatmapArgs {
    /// Customer locations (.json records or .geojson points)
    pub input: PathBuf,

    /// Grid cell edge in micro-degrees; overrides the configured value
    #[arg(long, short = 'g')]
    pub grid_size: Option<String>,

    /// Emit a GeoJSON layer of cell centres
    #[arg(long)]
    pub geojson: bool,
}
