//! Display graphics built from raw coordinate rows
//!
//! Rows come straight from a parsed or reprojected geometry, e.g.
//! `[[32.8597, 39.9334]]`. A row needs at least two components to become a
//! vertex; extra components are ignored.

use log::debug;
use serde::Serialize;

use super::styles::{StyleDefinitions, Symbol};
use crate::coordinate::Coordinate;
use crate::wkt::{Geometry, GeometryKind};

/// CRS of a graphic, by numeric well-known id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

/// A geometry with the CRS and symbol the rendering layer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Graphic {
    pub geometry: Geometry,
    pub spatial_reference: SpatialReference,
    pub symbol: Symbol,
    pub visible: bool,
}

/// Builds graphics with a fixed set of symbols
pub struct GraphicBuilder<'a> {
    styles: &'a StyleDefinitions,
}

impl GraphicBuilder<'static> {
    /// Builder using the embedded default styles
    pub fn new() -> Self {
        GraphicBuilder { styles: StyleDefinitions::builtin() }
    }
}

impl Default for GraphicBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GraphicBuilder<'a> {
    /// Builder using custom styles
    pub fn with_styles(styles: &'a StyleDefinitions) -> Self {
        GraphicBuilder { styles }
    }

    /// Point graphic from the first row
    ///
    /// Returns `None` when there is no first row or it has fewer than two
    /// components. Rows after the first are ignored.
    pub fn build_point<R: AsRef<[f64]>>(&self, coords: &[R], epsg: u32) -> Option<Graphic> {
        let first = Coordinate::from_components(coords.first()?.as_ref())?;
        Some(self.graphic(Geometry::Point(first), epsg, self.styles.marker_symbol()))
    }

    /// Polyline graphic over every row, as a single path
    pub fn build_linestring<R: AsRef<[f64]>>(&self, coords: &[R], epsg: u32) -> Graphic {
        self.graphic(Geometry::LineString(vertices(coords)), epsg, self.styles.line_symbol())
    }

    /// Polygon graphic over every row, as a single ring; closure is not checked
    pub fn build_polygon<R: AsRef<[f64]>>(&self, coords: &[R], epsg: u32) -> Graphic {
        self.graphic(Geometry::Polygon(vertices(coords)), epsg, self.styles.fill_symbol())
    }

    /// One point graphic per usable row
    pub fn build_multipoint<R: AsRef<[f64]>>(&self, coords: &[R], epsg: u32) -> Vec<Graphic> {
        coords.iter()
            .filter_map(|row| Coordinate::from_components(row.as_ref()))
            .map(|point| self.graphic(Geometry::Point(point), epsg, self.styles.marker_symbol()))
            .collect()
    }

    /// Dispatch on the geometry kind
    ///
    /// Unsupported kinds produce no graphics.
    pub fn build_graphics<R: AsRef<[f64]>>(&self, kind: &GeometryKind, coords: &[R], epsg: u32) -> Vec<Graphic> {
        let graphics = match kind {
            GeometryKind::Point => self.build_point(coords, epsg).into_iter().collect(),
            GeometryKind::LineString => vec![self.build_linestring(coords, epsg)],
            GeometryKind::Polygon => vec![self.build_polygon(coords, epsg)],
            GeometryKind::MultiPoint => self.build_multipoint(coords, epsg),
            GeometryKind::Unsupported(_) => Vec::new(),
        };

        debug!("Built {} graphic(s) for {} in EPSG:{}", graphics.len(), kind, epsg);
        graphics
    }

    fn graphic(&self, geometry: Geometry, epsg: u32, symbol: Symbol) -> Graphic {
        Graphic {
            geometry,
            spatial_reference: SpatialReference { wkid: epsg },
            symbol,
            visible: true,
        }
    }
}

fn vertices<R: AsRef<[f64]>>(coords: &[R]) -> Vec<Coordinate> {
    coords.iter()
        .filter_map(|row| Coordinate::from_components(row.as_ref()))
        .collect()
}

/// [`GraphicBuilder::build_point`] with the default styles
pub fn build_point<R: AsRef<[f64]>>(coords: &[R], epsg: u32) -> Option<Graphic> {
    GraphicBuilder::new().build_point(coords, epsg)
}

/// [`GraphicBuilder::build_linestring`] with the default styles
pub fn build_linestring<R: AsRef<[f64]>>(coords: &[R], epsg: u32) -> Graphic {
    GraphicBuilder::new().build_linestring(coords, epsg)
}

/// [`GraphicBuilder::build_polygon`] with the default styles
pub fn build_polygon<R: AsRef<[f64]>>(coords: &[R], epsg: u32) -> Graphic {
    GraphicBuilder::new().build_polygon(coords, epsg)
}

/// [`GraphicBuilder::build_multipoint`] with the default styles
pub fn build_multipoint<R: AsRef<[f64]>>(coords: &[R], epsg: u32) -> Vec<Graphic> {
    GraphicBuilder::new().build_multipoint(coords, epsg)
}
