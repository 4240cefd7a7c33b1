//! Configuration loading utilities for CLI commands

use crate::cli::Cli;
use anyhow::{Context, Result};
use custmap_core::config::{parse_distance_unit, CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "custmap.toml";

/// Load layered configuration: defaults, file, environment, then CLI flags
pub fn load_config(cli: &Cli, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path(cli.config.as_deref()) {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(global_overrides(cli, overrides)?);

    Ok(config)
}

/// Resolve which config file to read, if any
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    }
}

/// Merge the global flags into the command-specific overrides
fn global_overrides(cli: &Cli, mut overrides: CliConfigOverrides) -> Result<CliConfigOverrides> {
    if let Some(unit) = &cli.unit {
        overrides.distance_unit = Some(parse_distance_unit(unit)?);
    }

    if cli.strict {
        overrides.skip_invalid = Some(false);
    }

    Ok(overrides)
}
