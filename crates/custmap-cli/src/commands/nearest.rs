//! Nearest command implementation

use super::load_input;
use crate::cli::{Cli, NearestArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{NearestOutput, WithinOutput};
use anyhow::Result;
use custmap_core::config::{parse_radius, CliConfigOverrides};
use custmap_core::geo::{nearest, within_radius};
use custmap_core::models::Distance;
use tabled::Tabled;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Distance")]
    distance: String,
}

pub fn execute(args: &NearestArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;
    let unit = config.distance_unit.value;
    let within_meters = args.within.as_deref().map(parse_radius).transpose()?;

    let coordinates = load_input(&args.input, &config, output)?;
    let closest = nearest(&args.target, &coordinates);
    let within = within_meters.map(|radius_meters| WithinOutput {
        radius_meters,
        matches: within_radius(&args.target, &coordinates, radius_meters),
    });

    if output.is_json() {
        output.result(NearestOutput { target: args.target, nearest: closest, within })?;
        return Ok(());
    }

    output.section("Nearest Customer");
    output.kv("Target", args.target);
    match closest {
        Some(result) => {
            output.kv("Location", result.coordinate);
            output.kv("Distance", Distance::from_meters(result.distance_meters, unit));
        }
        None => output.info("No customers to search"),
    }

    if let Some(within) = within {
        output.section(format!(
            "Within {}",
            Distance::from_meters(within.radius_meters, unit)
        ));
        let rows: Vec<MatchRow> = within
            .matches
            .iter()
            .map(|m| MatchRow {
                location: m.coordinate.to_string(),
                distance: Distance::from_meters(m.distance_meters, unit).to_string(),
            })
            .collect();
        output.table(rows);
    }

    Ok(())
}
