//! Command implementations

mod analyze;
mod cluster;
mod coordinate;
mod heatmap;
mod inspect;
mod nearest;

use crate::cli::{Cli, Commands};
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use custmap_core::config::LayeredConfig;
use custmap_core::formats::read_coordinates;
use custmap_core::Coordinate;
use std::path::Path;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match &cli.command {
        Commands::Validate(args) => coordinate::validate(args, &output),
        Commands::Format(args) => coordinate::format(args, &output),
        Commands::Distance(args) => coordinate::distance(args, &cli, &output),
        Commands::Bbox(args) => analyze::bbox(args, &cli, &output),
        Commands::Centroid(args) => analyze::centroid(args, &cli, &output),
        Commands::Area(args) => analyze::area(args, &cli, &output),
        Commands::Cluster(args) => cluster::execute(args, &cli, &output),
        Commands::Nearest(args) => nearest::execute(args, &cli, &output),
        Commands::Heatmap(args) => heatmap::execute(args, &cli, &output),
        Commands::Config => inspect::execute(&cli, &output),
    }
}

/// Read the input file with the configured skip/fail policy
fn load_input(path: &Path, config: &LayeredConfig, output: &OutputWriter) -> Result<Vec<Coordinate>> {
    let coordinates = read_coordinates(path, config.skip_invalid.value)
        .map_err(|e| errors::input_failed(path, e))?;

    if coordinates.is_empty() {
        output.warning(format!("No valid coordinates found in {}", path.display()));
    }

    Ok(coordinates)
}
