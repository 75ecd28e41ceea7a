//! Coordinate transformation service
//!
//! Projection math is delegated to `proj4rs`. The rest of the crate only sees
//! the [`CrsTransformer`] trait, keyed by `EPSG:<code>` identifiers, so tests
//! and embedding applications can plug in another service.

use log::debug;
use proj4rs::proj::Proj;

use super::crs::{parse_epsg_code, CoordinateSystem};
use super::point::Coordinate;
use crate::errors::TransformError;

/// A service that transforms coordinates between two CRSs
pub trait CrsTransformer {
    /// Transform every coordinate from `from_crs` to `to_crs`
    ///
    /// # Arguments
    /// * `from_crs` - Source identifier, e.g. `"EPSG:4326"`
    /// * `to_crs` - Target identifier, e.g. `"EPSG:3857"`
    /// * `coords` - Coordinates in the source CRS
    ///
    /// # Returns
    /// The transformed coordinates in the same order, or the first error
    fn transform(&self, from_crs: &str, to_crs: &str, coords: &[Coordinate])
        -> Result<Vec<Coordinate>, TransformError>;
}

/// Transformer backed by the `proj4rs` EPSG definitions
///
/// Geographic CRSs take and return degrees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Proj4Transformer;

impl Proj4Transformer {
    /// Create a new transformer
    pub fn new() -> Self {
        Proj4Transformer
    }

    /// Resolve an `EPSG:<code>` identifier into a projection
    fn projection(crs: &str) -> Result<Proj, TransformError> {
        // Aliases such as 102100 are folded onto their canonical EPSG code
        let code = CoordinateSystem::from_epsg(parse_epsg_code(crs)?).epsg_code();
        let code = u16::try_from(code)
            .map_err(|_| TransformError::UnknownCrs(crs.to_string()))?;

        Proj::from_epsg_code(code)
            .map_err(|e| TransformError::UnknownCrs(format!("{}: {}", crs, e)))
    }
}

impl CrsTransformer for Proj4Transformer {
    fn transform(&self, from_crs: &str, to_crs: &str, coords: &[Coordinate])
        -> Result<Vec<Coordinate>, TransformError> {
        let source = Self::projection(from_crs)?;
        let target = Self::projection(to_crs)?;

        debug!("Transforming {} coordinates from {} to {}", coords.len(), from_crs, to_crs);

        coords.iter().map(|coord| {
            let mut point = if source.is_latlong() {
                (coord.x.to_radians(), coord.y.to_radians(), 0.0)
            } else {
                (coord.x, coord.y, 0.0)
            };

            proj4rs::transform::transform(&source, &target, &mut point)
                .map_err(|e| TransformError::Projection(e.to_string()))?;

            let (x, y) = if target.is_latlong() {
                (point.0.to_degrees(), point.1.to_degrees())
            } else {
                (point.0, point.1)
            };

            if !x.is_finite() || !y.is_finite() {
                return Err(TransformError::Projection(format!(
                    "({}, {}) has no finite image in {}", coord.x, coord.y, to_crs
                )));
            }

            Ok(Coordinate::new(x, y))
        }).collect()
    }
}
