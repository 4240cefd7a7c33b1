//! Error types for Custmap

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustmapError {
    // Input errors
    #[error("Input file not found at {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unsupported input format: {extension}. Use .json or .geojson")]
    UnsupportedFormat { extension: String },

    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CustmapError {
    fn from(err: serde_json::Error) -> Self {
        CustmapError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CustmapError>;
