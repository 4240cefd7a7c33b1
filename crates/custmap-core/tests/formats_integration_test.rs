//! Integration tests for reading customer coordinate files

use custmap_core::formats::{clusters_to_geojson, read_coordinates};
use custmap_core::geo::cluster;
use custmap_core::{Coordinate, CustmapError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_records_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("customers.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "Warung Made", "latitude": -8.5069, "longitude": 115.2625},
            {"id": 2, "name": "Kopi Bali", "latitude": "-8.5070", "longitude": "115.2627"},
            {"id": 3, "name": "No location", "latitude": null, "longitude": null}
        ]"#,
    )
    .unwrap();

    let coords = read_coordinates(&path, true).unwrap();
    assert_eq!(coords.len(), 2);

    let err = read_coordinates(&path, false).unwrap_err();
    assert!(matches!(err, CustmapError::InvalidRecord { index: 2, .. }));
}

#[test]
fn test_geojson_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("customers.geojson");
    fs::write(
        &path,
        r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [115.2625, -8.5069]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [115.2627, -8.5070]}, "properties": {}}
            ]
        }"#,
    )
    .unwrap();

    let coords = read_coordinates(&path, true).unwrap();
    assert_eq!(coords[0], Coordinate::new(-8.5069, 115.2625));

    let clusters = cluster(&coords, 1000.0);
    let layer = clusters_to_geojson(&clusters);
    assert_eq!(layer.features.len(), 1);

    let json = serde_json::to_value(&layer).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][0]["properties"]["count"], 2);
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("customers.csv");
    fs::write(&path, "latitude,longitude\n1,2\n").unwrap();

    let err = read_coordinates(&path, true).unwrap_err();
    assert!(matches!(err, CustmapError::UnsupportedFormat { .. }));
}
