//! GeoJSON point layers, in and out

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde_json::Value as JsonValue;

use super::{accept_coordinate, CoordinateReader};
use crate::error::{CustmapError, Result};
use crate::models::{BoundingBox, Cluster, Coordinate, HeatmapCell};

/// GeoJSON reader taking Point and MultiPoint geometries
pub struct GeoJsonReader;

impl CoordinateReader for GeoJsonReader {
    fn read_value(&self, value: &JsonValue, skip_invalid: bool) -> Result<Vec<Coordinate>> {
        let geojson = GeoJson::from_json_value(value.clone()).map_err(|e| {
            CustmapError::Serialization(format!("Failed to parse GeoJSON: {}", e))
        })?;

        let geometries: Vec<Option<&Geometry>> = match &geojson {
            GeoJson::FeatureCollection(fc) => {
                fc.features.iter().map(|f| f.geometry.as_ref()).collect()
            }
            GeoJson::Feature(feature) => vec![feature.geometry.as_ref()],
            GeoJson::Geometry(geom) => vec![Some(geom)],
        };

        let mut coordinates = Vec::new();
        for (index, geometry) in geometries.into_iter().enumerate() {
            let Some(geometry) = geometry else {
                tracing::debug!(index, "Skipping feature without geometry");
                continue;
            };

            match &geometry.value {
                Value::Point(position) => {
                    accept_position(index, position, skip_invalid, &mut coordinates)?;
                }
                Value::MultiPoint(positions) => {
                    for position in positions {
                        accept_position(index, position, skip_invalid, &mut coordinates)?;
                    }
                }
                _ => {
                    tracing::debug!(index, "Skipping non-point feature");
                }
            }
        }

        Ok(coordinates)
    }

    fn format_name(&self) -> &str {
        "GeoJSON"
    }
}

// GeoJSON positions are [longitude, latitude, (altitude)]
fn accept_position(
    index: usize,
    position: &[f64],
    skip_invalid: bool,
    out: &mut Vec<Coordinate>,
) -> Result<()> {
    accept_coordinate(index, position.get(1), position.first(), skip_invalid, out)
}

fn point(coord: Coordinate) -> Geometry {
    Geometry::new(Value::Point(vec![coord.longitude, coord.latitude]))
}

fn point_feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// One Point feature per cluster centroid with `count` and `rank` properties
pub fn clusters_to_geojson(clusters: &[Cluster]) -> FeatureCollection {
    let features = clusters
        .iter()
        .enumerate()
        .map(|(rank, cluster)| {
            let mut properties = JsonObject::new();
            properties.insert("count".to_string(), JsonValue::from(cluster.count));
            properties.insert("rank".to_string(), JsonValue::from(rank + 1));
            point_feature(point(cluster.centroid()), properties)
        })
        .collect();

    collection(features)
}

/// One Point feature per occupied cell with an `intensity` property
pub fn heatmap_to_geojson(cells: &[HeatmapCell]) -> FeatureCollection {
    let features = cells
        .iter()
        .map(|cell| {
            let mut properties = JsonObject::new();
            properties.insert("intensity".to_string(), JsonValue::from(cell.intensity));
            point_feature(point(Coordinate::new(cell.latitude, cell.longitude)), properties)
        })
        .collect();

    collection(features)
}

/// Closed Polygon feature tracing the box
pub fn bounding_box_to_geojson(bbox: &BoundingBox) -> Feature {
    let ring = vec![
        vec![bbox.min_lng, bbox.min_lat],
        vec![bbox.max_lng, bbox.min_lat],
        vec![bbox.max_lng, bbox.max_lat],
        vec![bbox.min_lng, bbox.max_lat],
        vec![bbox.min_lng, bbox.min_lat],
    ];

    Feature {
        bbox: Some(vec![bbox.min_lng, bbox.min_lat, bbox.max_lng, bbox.max_lat]),
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}
