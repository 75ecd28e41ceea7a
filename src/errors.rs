//! Error types for geometry text conversion
//!
//! Each conversion entry point reports its own error kind so callers can
//! decide how to surface it. Reprojection errors stay internal to the
//! Reprojector unless the caller explicitly asks for them.

use std::io;
use thiserror::Error;

/// Failures while reading Well-Known-Text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// No `(` was found, so there is no geometry keyword to read
    #[error("Missing geometry tag: no '(' found in WKT")]
    MissingGeometryTag,

    /// A coordinate token could not be read as an `x y` pair
    #[error("Invalid coordinate '{token}' at position {position}")]
    InvalidCoordinate { token: String, position: usize },

    /// The keyword names a geometry kind this crate does not handle
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    /// An opening parenthesis is never closed
    #[error("Unclosed parenthesis opened at position {position}")]
    UnclosedParenthesis { position: usize },

    /// A single-coordinate geometry was given no coordinate
    #[error("{0} has no coordinates")]
    EmptyGeometry(String),
}

/// Failures while converting between WKT and GeoJSON
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to parse GeoJSON text: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures reported by a coordinate transformation service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The CRS identifier is malformed or not in the EPSG table
    #[error("Unknown coordinate reference system: {0}")]
    UnknownCrs(String),

    /// The projection math itself failed
    #[error("Projection failed: {0}")]
    Projection(String),
}

/// Top-level error for the facade and the CLI
#[derive(Debug, Error)]
pub enum WktKitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse style definitions: {0}")]
    Style(#[from] toml::de::Error),

    #[error("{0}")]
    GenericError(String),
}

impl From<String> for WktKitError {
    fn from(msg: String) -> Self {
        WktKitError::GenericError(msg)
    }
}

/// Result type for facade and CLI operations
pub type WktKitResult<T> = Result<T, WktKitError>;
