//! Coordinate sequence reprojection
//!
//! [`Reprojector::reproject`] never reports failure: when the transformation
//! service errors it logs a warning and hands back the input coordinates.
//! Callers that need to know use [`Reprojector::try_reproject`].

use std::fmt;
use log::{debug, warn};

use super::crs::crs_identifier;
use super::point::{Coordinate, CoordinateSequence};
use super::transform::{CrsTransformer, Proj4Transformer};
use crate::errors::TransformError;

/// A reprojection that did not happen, with the coordinates it was given
#[derive(Debug, Clone, PartialEq)]
pub struct ReprojectionFailure {
    /// Why the transformation service refused
    pub reason: TransformError,
    /// The untouched input coordinates
    pub original: CoordinateSequence,
}

impl fmt::Display for ReprojectionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reprojection of {} coordinates failed: {}", self.original.len(), self.reason)
    }
}

impl std::error::Error for ReprojectionFailure {}

/// Reprojects coordinate sequences through a transformation service
pub struct Reprojector<T: CrsTransformer> {
    transformer: T,
}

impl Reprojector<Proj4Transformer> {
    /// Create a reprojector backed by `proj4rs`
    pub fn new() -> Self {
        Reprojector { transformer: Proj4Transformer::new() }
    }
}

impl Default for Reprojector<Proj4Transformer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CrsTransformer> Reprojector<T> {
    /// Create a reprojector around a custom transformation service
    pub fn with_transformer(transformer: T) -> Self {
        Reprojector { transformer }
    }

    /// Reproject coordinates from one EPSG code to another
    ///
    /// `None` passes through as `None`. Equal codes or an empty sequence
    /// return the input unchanged. Any service error also returns the
    /// input unchanged.
    ///
    /// # Arguments
    /// * `coords` - Coordinates in the source CRS, if there is a geometry yet
    /// * `from_epsg` - Source EPSG code, e.g. `"4326"`
    /// * `to_epsg` - Target EPSG code, e.g. `"3857"`
    pub fn reproject(&self, coords: Option<&[Coordinate]>, from_epsg: &str, to_epsg: &str)
        -> Option<CoordinateSequence> {
        let coords = coords?;

        match self.try_reproject(coords, from_epsg, to_epsg) {
            Ok(transformed) => Some(transformed),
            Err(failure) => {
                warn!("{}; keeping EPSG:{} coordinates", failure, from_epsg);
                Some(failure.original)
            }
        }
    }

    /// Reproject coordinates, reporting a service failure to the caller
    pub fn try_reproject(&self, coords: &[Coordinate], from_epsg: &str, to_epsg: &str)
        -> Result<CoordinateSequence, ReprojectionFailure> {
        if from_epsg == to_epsg || coords.is_empty() {
            debug!("Identity reprojection (EPSG:{} -> EPSG:{}, {} coordinates)",
                   from_epsg, to_epsg, coords.len());
            return Ok(coords.to_vec());
        }

        let from_crs = crs_identifier(from_epsg);
        let to_crs = crs_identifier(to_epsg);

        self.transformer.transform(&from_crs, &to_crs, coords)
            .map_err(|reason| ReprojectionFailure {
                reason,
                original: coords.to_vec(),
            })
    }
}

/// Reproject coordinates with the default `proj4rs` service
///
/// See [`Reprojector::reproject`] for the fallback rules.
pub fn reproject(coords: Option<&[Coordinate]>, from_epsg: &str, to_epsg: &str) -> Option<CoordinateSequence> {
    Reprojector::new().reproject(coords, from_epsg, to_epsg)
}
