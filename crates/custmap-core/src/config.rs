use crate::error::{CustmapError, Result};
use crate::geo::{DEFAULT_CLUSTER_RADIUS_METERS, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use crate::models::{Distance, DistanceUnit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Custmap
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Seed radius for proximity clustering
    pub cluster_radius_meters: ConfigValue<f64>,
    /// Heatmap cell edge in micro-degrees
    pub heatmap_grid_size: ConfigValue<f64>,
    /// Unit distances are reported in
    pub distance_unit: ConfigValue<DistanceUnit>,
    /// Drop records with invalid coordinates instead of failing
    pub skip_invalid: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            cluster_radius_meters: ConfigValue::new(
                DEFAULT_CLUSTER_RADIUS_METERS,
                ConfigSource::Default,
            ),
            heatmap_grid_size: ConfigValue::new(DEFAULT_GRID_SIZE, ConfigSource::Default),
            distance_unit: ConfigValue::new(DistanceUnit::Meters, ConfigSource::Default),
            skip_invalid: ConfigValue::new(true, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CustmapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CustmapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius) = file_config.cluster_radius {
            let meters = match radius {
                RadiusValue::Meters(m) => validate_radius(m)?,
                RadiusValue::Text(s) => parse_radius(&s)?,
            };
            self.cluster_radius_meters.update(meters, ConfigSource::File);
        }

        if let Some(grid_size) = file_config.heatmap_grid_size {
            validate_grid_size(grid_size)?;
            self.heatmap_grid_size.update(grid_size, ConfigSource::File);
        }

        if let Some(unit_str) = file_config.distance_unit {
            let distance_unit = parse_distance_unit(&unit_str)?;
            self.distance_unit.update(distance_unit, ConfigSource::File);
        }

        if let Some(skip_invalid) = file_config.skip_invalid {
            self.skip_invalid.update(skip_invalid, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CUSTMAP_CLUSTER_RADIUS
        if let Ok(radius_str) = env::var("CUSTMAP_CLUSTER_RADIUS") {
            match parse_radius(&radius_str) {
                Ok(meters) => self.cluster_radius_meters.update(meters, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CUSTMAP_CLUSTER_RADIUS value '{}': expected a distance such as 1000 or 1km",
                    radius_str
                ),
            }
        }

        // CUSTMAP_HEATMAP_GRID
        if let Ok(grid_str) = env::var("CUSTMAP_HEATMAP_GRID") {
            match parse_grid_size(&grid_str) {
                Ok(grid_size) => self.heatmap_grid_size.update(grid_size, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CUSTMAP_HEATMAP_GRID value '{}': expected a positive number",
                    grid_str
                ),
            }
        }

        // CUSTMAP_DISTANCE_UNIT
        if let Ok(unit_str) = env::var("CUSTMAP_DISTANCE_UNIT") {
            match parse_distance_unit(&unit_str) {
                Ok(unit) => self.distance_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CUSTMAP_DISTANCE_UNIT value '{}': expected meters, kilometers, miles, or feet",
                    unit_str
                ),
            }
        }

        // CUSTMAP_SKIP_INVALID
        if let Ok(skip_str) = env::var("CUSTMAP_SKIP_INVALID") {
            match parse_bool(&skip_str) {
                Ok(skip) => self.skip_invalid.update(skip, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CUSTMAP_SKIP_INVALID value '{}': expected true or false",
                    skip_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(radius) = overrides.cluster_radius_meters {
            self.cluster_radius_meters.update(radius, ConfigSource::Cli);
        }

        if let Some(grid_size) = overrides.heatmap_grid_size {
            self.heatmap_grid_size.update(grid_size, ConfigSource::Cli);
        }

        if let Some(distance_unit) = overrides.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::Cli);
        }

        if let Some(skip_invalid) = overrides.skip_invalid {
            self.skip_invalid.update(skip_invalid, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "cluster_radius".to_string(),
            (format!("{} m", self.cluster_radius_meters.value), self.cluster_radius_meters.source),
        );

        map.insert(
            "heatmap_grid_size".to_string(),
            (self.heatmap_grid_size.value.to_string(), self.heatmap_grid_size.source),
        );

        map.insert(
            "distance_unit".to_string(),
            (format!("{:?}", self.distance_unit.value), self.distance_unit.source),
        );

        map.insert(
            "skip_invalid".to_string(),
            (self.skip_invalid.value.to_string(), self.skip_invalid.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    /// Either a number of meters or a string such as "1.5km"
    cluster_radius: Option<RadiusValue>,
    heatmap_grid_size: Option<f64>,
    /// Same spellings as the environment and `--unit`: "km", "miles", ...
    distance_unit: Option<String>,
    skip_invalid: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum RadiusValue {
    Meters(f64),
    Text(String),
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub cluster_radius_meters: Option<f64>,
    pub heatmap_grid_size: Option<f64>,
    pub distance_unit: Option<DistanceUnit>,
    pub skip_invalid: Option<bool>,
}

/// Parse distance unit from string
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    DistanceUnit::parse(s)
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(CustmapError::ConfigInvalid {
            key: "skip_invalid".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

/// Parse a cluster radius such as "1000", "1km" or "0.5 mi" into meters
pub fn parse_radius(s: &str) -> Result<f64> {
    validate_radius(Distance::parse(s)?.to_meters())
}

/// Parse a heatmap grid size in micro-degrees
pub fn parse_grid_size(s: &str) -> Result<f64> {
    let grid_size: f64 = s.trim().parse().map_err(|_| CustmapError::ConfigInvalid {
        key: "heatmap_grid_size".to_string(),
        reason: format!("Invalid grid size: {}. Expected a number", s),
    })?;
    validate_grid_size(grid_size)
}

fn validate_radius(meters: f64) -> Result<f64> {
    if !meters.is_finite() || meters < 0.0 {
        return Err(CustmapError::ConfigInvalid {
            key: "cluster_radius".to_string(),
            reason: format!("Radius must be a non-negative distance, got {}", meters),
        });
    }
    Ok(meters)
}

fn validate_grid_size(grid_size: f64) -> Result<f64> {
    if !grid_size.is_finite() || grid_size < MIN_GRID_SIZE {
        return Err(CustmapError::ConfigInvalid {
            key: "heatmap_grid_size".to_string(),
            reason: format!(
                "Grid size must be at least {} micro-degree, got {}",
                MIN_GRID_SIZE, grid_size
            ),
        });
    }
    Ok(grid_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.cluster_radius_meters.value, 1000.0);
        assert_eq!(config.cluster_radius_meters.source, ConfigSource::Default);
        assert_eq!(config.heatmap_grid_size.value, 500.0);
        assert_eq!(config.distance_unit.value, DistanceUnit::Meters);
        assert!(config.skip_invalid.value);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
cluster_radius = "2.5km"
heatmap_grid_size = 250.0
distance_unit = "km"
skip_invalid = false
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.cluster_radius_meters.value, 2500.0);
        assert_eq!(config.cluster_radius_meters.source, ConfigSource::File);
        assert_eq!(config.heatmap_grid_size.value, 250.0);
        assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
        assert!(!config.skip_invalid.value);
    }

    #[test]
    fn test_file_unit_spellings() {
        for spelling in ["km", "kilometers", "Kilometers", "KM"] {
            let mut file = NamedTempFile::new().unwrap();
            writeln!(file, "distance_unit = \"{}\"", spelling).unwrap();

            let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();
            assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers, "{}", spelling);
        }

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "distance_unit = \"furlongs\"").unwrap();
        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(CustmapError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_numeric_radius_in_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cluster_radius = 750.0").unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();
        assert_eq!(config.cluster_radius_meters.value, 750.0);
    }

    #[test]
    fn test_rejects_bad_grid_size() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "heatmap_grid_size = -1.0").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(CustmapError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            cluster_radius_meters: Some(300.0),
            distance_unit: Some(DistanceUnit::Miles),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.cluster_radius_meters.value, 300.0);
        assert_eq!(config.cluster_radius_meters.source, ConfigSource::Cli);
        assert_eq!(config.distance_unit.value, DistanceUnit::Miles);
        // These should still be defaults
        assert_eq!(config.heatmap_grid_size.source, ConfigSource::Default);
        assert_eq!(config.skip_invalid.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_radius_and_grid() {
        assert_eq!(parse_radius("1km").unwrap(), 1000.0);
        assert_eq!(parse_radius("250").unwrap(), 250.0);
        assert!(parse_radius("-5m").is_err());
        assert_eq!(parse_grid_size(" 250 ").unwrap(), 250.0);
        assert!(parse_grid_size("0").is_err());
        assert!(parse_grid_size("1e-11").is_err());
        assert!(parse_grid_size("NaN").is_err());
        assert!(parse_grid_size("wide").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("cluster_radius"));
        assert!(map.contains_key("heatmap_grid_size"));
        assert!(map.contains_key("distance_unit"));
        assert!(map.contains_key("skip_invalid"));

        let (radius, source) = &map["cluster_radius"];
        assert_eq!(radius, "1000 m");
        assert_eq!(*source, ConfigSource::Default);
    }
}
