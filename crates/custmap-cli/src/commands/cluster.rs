//! Cluster command implementation

use super::load_input;
use crate::cli::{Cli, ClusterArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::ClusterOutput;
use anyhow::Result;
use custmap_core::config::{parse_radius, CliConfigOverrides};
use custmap_core::formats::clusters_to_geojson;
use custmap_core::geo::cluster;
use custmap_core::models::Distance;
use tabled::Tabled;

#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Customers")]
    count: usize,
    #[tabled(rename = "Centroid")]
    centroid: String,
}

pub fn execute(args: &ClusterArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let overrides = CliConfigOverrides {
        cluster_radius_meters: args.radius.as_deref().map(parse_radius).transpose()?,
        ..Default::default()
    };
    let config = load_config(cli, overrides)?;
    let radius_meters = config.cluster_radius_meters.value;

    let coordinates = load_input(&args.input, &config, output)?;
    let clusters = cluster(&coordinates, radius_meters);

    if args.geojson {
        return output.result(clusters_to_geojson(&clusters));
    }

    if output.is_json() {
        output.result(ClusterOutput { point_count: coordinates.len(), radius_meters, clusters })?;
        return Ok(());
    }

    output.section("Clusters");
    output.kv("Points", coordinates.len());
    output.kv("Radius", Distance::from_meters(radius_meters, config.distance_unit.value));
    output.kv("Clusters", clusters.len());

    let rows: Vec<ClusterRow> = clusters
        .iter()
        .enumerate()
        .map(|(i, c)| ClusterRow { rank: i + 1, count: c.count, centroid: c.centroid().to_string() })
        .collect();
    output.table(rows);

    Ok(())
}
