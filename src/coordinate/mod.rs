//! Coordinate handling for geospatial data
//!
//! This module provides coordinate types, EPSG-coded coordinate reference
//! systems and reprojection of coordinate sequences between them.

mod point;
mod crs;
mod transform;
mod reproject;

// Re-export key types
pub use self::point::{extent, Coordinate, CoordinateSequence};
pub use self::crs::{
    crs_identifier, is_valid_epsg, parse_epsg_code, CoordinateSystem, EPSG_PREFIX, KNOWN_CRS,
};
pub use self::transform::{CrsTransformer, Proj4Transformer};
pub use self::reproject::{reproject, ReprojectionFailure, Reprojector};
