//! Coordinate record formats
//!
//! Customer locations reach this crate as exported JSON records or as GeoJSON
//! point layers. Both readers produce plain [`Coordinate`] lists; the
//! GeoJSON writers turn analysis results back into layers for the map.

pub mod geojson;
pub mod records;

use crate::error::{CustmapError, Result};
use crate::geo::{is_valid_coordinate, AsDegrees};
use crate::models::Coordinate;
use std::fs;
use std::path::Path;

pub use self::geojson::{
    bounding_box_to_geojson, clusters_to_geojson, heatmap_to_geojson, GeoJsonReader,
};
pub use self::records::RecordsReader;

/// Trait for turning a parsed JSON document into coordinates
pub trait CoordinateReader {
    /// Extract coordinates from a parsed document.
    ///
    /// With `skip_invalid` set, entries that are not valid WGS 84 positions
    /// are dropped; otherwise the first one fails the whole read.
    fn read_value(&self, value: &serde_json::Value, skip_invalid: bool) -> Result<Vec<Coordinate>>;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// Supported input encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of `{latitude, longitude, ...}` objects
    Records,
    /// GeoJSON FeatureCollection, Feature or Geometry
    GeoJson,
}

impl InputFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(InputFormat::Records),
            "geojson" => Ok(InputFormat::GeoJson),
            _ => Err(CustmapError::UnsupportedFormat { extension }),
        }
    }

    fn reader(&self) -> &'static dyn CoordinateReader {
        match self {
            InputFormat::Records => &RecordsReader,
            InputFormat::GeoJson => &GeoJsonReader,
        }
    }
}

/// Read coordinates from a `.json` or `.geojson` file
pub fn read_coordinates(path: &Path, skip_invalid: bool) -> Result<Vec<Coordinate>> {
    if !path.exists() {
        return Err(CustmapError::InputNotFound { path: path.to_path_buf() });
    }

    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let coordinates = parse_coordinates(&content, format, skip_invalid)?;

    tracing::debug!(
        path = %path.display(),
        count = coordinates.len(),
        "Read coordinates"
    );

    Ok(coordinates)
}

/// Parse coordinates from file content.
///
/// A `.json` document whose top level is a GeoJSON object rather than an
/// array is read as GeoJSON.
pub fn parse_coordinates(
    content: &str,
    format: InputFormat,
    skip_invalid: bool,
) -> Result<Vec<Coordinate>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let format = match format {
        InputFormat::Records if value.get("type").is_some() => InputFormat::GeoJson,
        other => other,
    };

    format.reader().read_value(&value, skip_invalid)
}

/// Validate one raw latitude/longitude pair and push it onto `out`.
///
/// Shared by the readers so both apply the same skip/fail policy.
pub(crate) fn accept_coordinate(
    index: usize,
    latitude: impl AsDegrees,
    longitude: impl AsDegrees,
    skip_invalid: bool,
    out: &mut Vec<Coordinate>,
) -> Result<()> {
    if let (Some(lat), Some(lng)) = (latitude.as_degrees(), longitude.as_degrees()) {
        if is_valid_coordinate(lat, lng) {
            out.push(Coordinate::new(lat, lng));
            return Ok(());
        }
    }

    if skip_invalid {
        tracing::debug!(index, "Skipping record without a valid coordinate");
        Ok(())
    } else {
        Err(CustmapError::InvalidRecord {
            index,
            reason: "latitude/longitude missing or out of range".to_string(),
        })
    }
}
