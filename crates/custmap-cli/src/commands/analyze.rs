//! Whole-set commands: bbox, centroid, area

use super::load_input;
use crate::cli::{BboxArgs, Cli, InputArgs};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{AreaOutput, BoundingBoxOutput, CentroidOutput};
use anyhow::Result;
use custmap_core::config::CliConfigOverrides;
use custmap_core::formats::bounding_box_to_geojson;
use custmap_core::geo::{bounding_box, centroid as planar_centroid, polygon_area};

pub fn bbox(args: &BboxArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;
    let coordinates = load_input(&args.input, &config, output)?;
    let bbox = bounding_box(&coordinates);

    if args.geojson {
        match &bbox {
            Some(b) => output.result(bounding_box_to_geojson(b))?,
            None => output.result(serde_json::Value::Null)?,
        }
        return Ok(());
    }

    if output.is_json() {
        output.result(BoundingBoxOutput { point_count: coordinates.len(), bounding_box: bbox })?;
    } else if let Some(b) = bbox {
        output.section("Bounding Box");
        output.kv("Points", coordinates.len());
        output.kv("Min latitude", format!("{:.6}", b.min_lat));
        output.kv("Max latitude", format!("{:.6}", b.max_lat));
        output.kv("Min longitude", format!("{:.6}", b.min_lng));
        output.kv("Max longitude", format!("{:.6}", b.max_lng));
        output.kv("Center", b.center());
    } else {
        output.info("No bounding box for an empty set");
    }

    Ok(())
}

pub fn centroid(args: &InputArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;
    let coordinates = load_input(&args.input, &config, output)?;
    let center = planar_centroid(&coordinates);

    if output.is_json() {
        output.result(CentroidOutput {
            point_count: coordinates.len(),
            centroid: center,
            formatted: center.map(|c| c.to_string()),
        })?;
    } else if let Some(c) = center {
        output.kv("Points", coordinates.len());
        output.kv("Centroid", c);
    } else {
        output.info("No centroid for an empty set");
    }

    Ok(())
}

pub fn area(args: &InputArgs, cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;
    let coordinates = load_input(&args.input, &config, output)?;
    let area_sq_km = polygon_area(&coordinates);

    if coordinates.len() < 3 {
        output.warning("At least 3 points are needed to trace an area");
    }

    if output.is_json() {
        output.result(AreaOutput { point_count: coordinates.len(), area_sq_km })?;
    } else {
        output.kv("Points", coordinates.len());
        output.kv("Area", format!("{:.3} km²", area_sq_km));
        output.info("Equirectangular approximation, accurate for small areas near the equator");
    }

    Ok(())
}
