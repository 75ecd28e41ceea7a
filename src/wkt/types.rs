//! Geometry kinds and geometry descriptors

use std::fmt;
use std::slice;

use serde::Serialize;

use crate::coordinate::{Coordinate, CoordinateSequence};

/// Geometry kind named by a WKT keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    /// Any other keyword, uppercased (e.g. `MULTIPOLYGON`)
    Unsupported(String),
}

impl GeometryKind {
    /// Match a keyword case-insensitively, ignoring surrounding whitespace
    pub fn from_keyword(keyword: &str) -> GeometryKind {
        let keyword = keyword.trim().to_uppercase();
        match keyword.as_str() {
            "POINT" => GeometryKind::Point,
            "LINESTRING" => GeometryKind::LineString,
            "POLYGON" => GeometryKind::Polygon,
            "MULTIPOINT" => GeometryKind::MultiPoint,
            _ => GeometryKind::Unsupported(keyword),
        }
    }

    /// The uppercase WKT keyword
    pub fn keyword(&self) -> &str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::Unsupported(keyword) => keyword,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, GeometryKind::Unsupported(_))
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A geometry descriptor: a kind tag with its coordinates
///
/// Polygons carry a single outer ring; interior rings are not modeled.
/// Rings are stored exactly as given, closed or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    LineString(CoordinateSequence),
    Polygon(CoordinateSequence),
    MultiPoint(CoordinateSequence),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
        }
    }

    /// All coordinates of the geometry in order
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(coord) => slice::from_ref(coord),
            Geometry::LineString(coords)
            | Geometry::Polygon(coords)
            | Geometry::MultiPoint(coords) => coords,
        }
    }

    /// Rebuild a geometry of the same kind around new coordinates
    ///
    /// Used after reprojection. A point keeps its old coordinate when
    /// `coords` is empty.
    pub fn with_coordinates(&self, coords: CoordinateSequence) -> Geometry {
        match self {
            Geometry::Point(old) => Geometry::Point(coords.first().copied().unwrap_or(*old)),
            Geometry::LineString(_) => Geometry::LineString(coords),
            Geometry::Polygon(_) => Geometry::Polygon(coords),
            Geometry::MultiPoint(_) => Geometry::MultiPoint(coords),
        }
    }

    /// Serialize with the plain-comma WKT writer
    pub fn to_wkt(&self) -> String {
        super::writer::to_wkt(Some(self))
    }
}
