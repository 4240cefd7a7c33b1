//! Custmap Core - Customer location geo-analysis
//!
//! This crate contains the coordinate models, the stateless geo-analysis
//! functions used to plot customers on a map, record readers, and layered
//! configuration.

pub mod config;
pub mod error;
pub mod formats;
pub mod geo;
pub mod models;

pub use error::{CustmapError, Result};
pub use models::{BoundingBox, Cluster, Coordinate, HeatmapCell, NearestResult};
