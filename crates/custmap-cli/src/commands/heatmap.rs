//! Heatmap command implementation

use super::load_input;
use crate::cli::{Cli, HeatmapArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::HeatmapOutput;
use anyhow::Result;
use custmap_core::config::{parse_grid_size, CliConfigOverrides};
use custmap_core::formats::heatmap_to_geojson;
use custmap_core::geo::heatmap;
use tabled::Tabled;

#[derive(Tabled)]
struct CellRow {
    #[tabled(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    longitude: String,
    #[tabled(rename = "Intensity")]
    intensity: usize,
}

pub fn execute(args: &HeatmapArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let overrides = CliConfigOverrides {
        heatmap_grid_size: args.grid_size.as_deref().map(parse_grid_size).transpose()?,
        ..Default::default()
    };
    let config = load_config(cli, overrides)?;
    let grid_size = config.heatmap_grid_size.value;

    let coordinates = load_input(&args.input, &config, output)?;
    let cells = heatmap(&coordinates, grid_size);

    if args.geojson {
        return output.result(heatmap_to_geojson(&cells));
    }

    if output.is_json() {
        output.result(HeatmapOutput { point_count: coordinates.len(), grid_size, cells })?;
        return Ok(());
    }

    output.section("Heatmap");
    output.kv("Points", coordinates.len());
    output.kv("Grid size", format!("{} µ°", grid_size));
    output.kv("Occupied cells", cells.len());

    let mut rows: Vec<CellRow> = cells
        .iter()
        .map(|cell| CellRow {
            latitude: format!("{:.6}", cell.latitude),
            longitude: format!("{:.6}", cell.longitude),
            intensity: cell.intensity,
        })
        .collect();
    // Hottest cells first for reading
    rows.sort_by(|a, b| b.intensity.cmp(&a.intensity));
    output.table(rows);

    Ok(())
}
