//! Config command implementation

use crate::cli::Cli;
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{ConfigValue, InspectConfigOutput};
use anyhow::Result;
use custmap_core::config::CliConfigOverrides;
use tabled::Tabled;

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, CliConfigOverrides::default())?;

    if output.is_json() {
        output.result(InspectConfigOutput {
            cluster_radius: ConfigValue {
                value: config.cluster_radius_meters.value,
                source: format!("{:?}", config.cluster_radius_meters.source),
            },
            heatmap_grid_size: ConfigValue {
                value: config.heatmap_grid_size.value,
                source: format!("{:?}", config.heatmap_grid_size.source),
            },
            distance_unit: ConfigValue {
                value: format!("{:?}", config.distance_unit.value),
                source: format!("{:?}", config.distance_unit.source),
            },
            skip_invalid: ConfigValue {
                value: config.skip_invalid.value,
                source: format!("{:?}", config.skip_invalid.source),
            },
        })?;
        return Ok(());
    }

    output.section("Configuration Values");

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source: format!("{:?}", source) })
        .collect();

    // Sort by key for consistent output
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.table(rows);

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}
