//! Single-position commands: validate, format, distance

use crate::cli::{Cli, CoordinateArgs, DistanceArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{DistanceOutput, FormatOutput, ValidateOutput};
use anyhow::{bail, Result};
use custmap_core::config::CliConfigOverrides;
use custmap_core::geo::{distance_meters, format_coordinate, is_valid_coordinate, AsDegrees};
use custmap_core::models::Distance;

pub fn validate(args: &CoordinateArgs, output: &OutputWriter) -> Result<()> {
    let valid = is_valid_coordinate(args.latitude.as_str(), args.longitude.as_str());

    if output.is_json() {
        output.result(ValidateOutput {
            latitude: args.latitude.clone(),
            longitude: args.longitude.clone(),
            valid,
        })?;
    } else if valid {
        output.success(format!("Valid coordinate: {}, {}", args.latitude, args.longitude));
    } else {
        output.warning(format!(
            "Invalid coordinate: {}, {} (latitude must be within [-90, 90], longitude within [-180, 180])",
            args.latitude, args.longitude
        ));
    }

    Ok(())
}

pub fn format(args: &CoordinateArgs, output: &OutputWriter) -> Result<()> {
    let (Some(latitude), Some(longitude)) =
        (args.latitude.as_degrees(), args.longitude.as_degrees())
    else {
        bail!(
            "Latitude and longitude must be numbers, got '{}' and '{}'",
            args.latitude,
            args.longitude
        );
    };

    let formatted = format_coordinate(latitude, longitude);

    if output.is_json() {
        output.result(FormatOutput { formatted })?;
    } else {
        output.kv("Formatted", formatted);
    }

    Ok(())
}

pub fn distance(args: &DistanceArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;
    let unit = config.distance_unit.value;

    let meters = distance_meters(&args.from, &args.to);
    let rendered = Distance::from_meters(meters, unit);

    if output.is_json() {
        output.result(DistanceOutput {
            from: args.from,
            to: args.to,
            distance_meters: meters,
            distance: rendered.value,
            unit: unit.symbol().to_string(),
        })?;
    } else {
        output.kv("From", args.from);
        output.kv("To", args.to);
        output.kv("Distance", rendered);
    }

    Ok(())
}
