//! Reader for exported customer records

use super::{accept_coordinate, CoordinateReader};
use crate::error::{CustmapError, Result};
use crate::models::Coordinate;

/// Reads a JSON array of objects carrying `latitude` and `longitude`.
///
/// Values may be numbers or numeric strings, as the customer table exports
/// them. Other fields are ignored.
pub struct RecordsReader;

impl CoordinateReader for RecordsReader {
    fn read_value(&self, value: &serde_json::Value, skip_invalid: bool) -> Result<Vec<Coordinate>> {
        let records = value.as_array().ok_or_else(|| {
            CustmapError::Serialization("Expected a JSON array of records".to_string())
        })?;

        let mut coordinates = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            accept_coordinate(
                index,
                record.get("latitude"),
                record.get("longitude"),
                skip_invalid,
                &mut coordinates,
            )?;
        }

        Ok(coordinates)
    }

    fn format_name(&self) -> &str {
        "Records"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_numbers_and_strings() {
        let value = json!([
            {"id": 1, "name": "Warung Made", "latitude": -8.5069, "longitude": 115.2625},
            {"id": 2, "name": "Kopi Bali", "latitude": "-8.65", "longitude": "115.21"}
        ]);

        let coords = RecordsReader.read_value(&value, false).unwrap();
        assert_eq!(coords, vec![Coordinate::new(-8.5069, 115.2625), Coordinate::new(-8.65, 115.21)]);
    }

    #[test]
    fn test_skips_invalid_when_lenient() {
        let value = json!([
            {"latitude": 95.0, "longitude": 0.0},
            {"latitude": null, "longitude": 0.0},
            {"longitude": 0.0},
            {"latitude": "n/a", "longitude": 0.0},
            {"latitude": 1.0, "longitude": 2.0}
        ]);

        let coords = RecordsReader.read_value(&value, true).unwrap();
        assert_eq!(coords, vec![Coordinate::new(1.0, 2.0)]);
    }

    #[test]
    fn test_fails_on_invalid_when_strict() {
        let value = json!([
            {"latitude": 1.0, "longitude": 2.0},
            {"latitude": 1.0, "longitude": 200.0}
        ]);

        let err = RecordsReader.read_value(&value, false).unwrap_err();
        assert!(matches!(err, CustmapError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(RecordsReader.read_value(&json!({"latitude": 1.0}), true).is_err());
    }
}
