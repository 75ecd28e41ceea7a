//! WKT reader for the flat geometry subset
//!
//! The accepted grammar has no nested multi-geometries, so a single scan over
//! the parenthesised body is enough:
//!
//! - `POINT (x y)`, `LINESTRING (x y, ...)`, `POLYGON ((x y, ...))`: the text
//!   between the first `(` and the first `)` after it, with one extra leading
//!   `(` dropped, split on `,`.
//! - `MULTIPOINT ((x y), (x y))` or `MULTIPOINT (x y, x y)`: the text between
//!   the first `(` and the last `)`, split on `,`, each group stripped of its
//!   own parentheses.

use log::debug;

use super::types::{Geometry, GeometryKind};
use crate::coordinate::{Coordinate, CoordinateSequence};
use crate::errors::ParseError;

/// Read the geometry keyword preceding the first `(`
///
/// # Arguments
/// * `wkt` - WKT text such as `point (30 10)`
///
/// # Returns
/// The uppercased kind, or `MissingGeometryTag` when there is no `(` or
/// nothing in front of it
pub fn geometry_kind(wkt: &str) -> Result<GeometryKind, ParseError> {
    let open = wkt.find('(').ok_or(ParseError::MissingGeometryTag)?;
    let keyword = wkt[..open].trim();

    if keyword.is_empty() {
        return Err(ParseError::MissingGeometryTag);
    }

    Ok(GeometryKind::from_keyword(keyword))
}

/// Read the coordinates of a WKT geometry
///
/// An empty (or all-whitespace) string gives an empty sequence. MultiPoint
/// members come back as one flat sequence.
///
/// # Arguments
/// * `wkt` - WKT text of a supported kind
///
/// # Returns
/// The coordinates in text order, or the first parse error
pub fn parse_coordinates(wkt: &str) -> Result<CoordinateSequence, ParseError> {
    if wkt.trim().is_empty() {
        return Ok(Vec::new());
    }

    let kind = geometry_kind(wkt)?;
    let coords = match &kind {
        GeometryKind::Point | GeometryKind::LineString | GeometryKind::Polygon => parse_ring_body(wkt)?,
        GeometryKind::MultiPoint => parse_multipoint_body(wkt)?,
        GeometryKind::Unsupported(keyword) => {
            return Err(ParseError::UnsupportedGeometryType(keyword.clone()));
        }
    };

    debug!("Parsed {} coordinates from {} WKT", coords.len(), kind);
    Ok(coords)
}

/// Read a WKT geometry into a descriptor
///
/// A point takes the first coordinate of its body; extra coordinates are
/// ignored.
pub fn parse_geometry(wkt: &str) -> Result<Geometry, ParseError> {
    let kind = geometry_kind(wkt)?;
    let coords = parse_coordinates(wkt)?;

    let geometry = match kind {
        GeometryKind::Point => {
            let first = coords.first().copied()
                .ok_or_else(|| ParseError::EmptyGeometry(kind.keyword().to_string()))?;
            Geometry::Point(first)
        },
        GeometryKind::LineString => Geometry::LineString(coords),
        GeometryKind::Polygon => Geometry::Polygon(coords),
        GeometryKind::MultiPoint => Geometry::MultiPoint(coords),
        GeometryKind::Unsupported(keyword) => return Err(ParseError::UnsupportedGeometryType(keyword)),
    };

    Ok(geometry)
}

/// Body of a single-ring geometry: first `(` to the first `)` after it
fn parse_ring_body(wkt: &str) -> Result<CoordinateSequence, ParseError> {
    let open = wkt.find('(').ok_or(ParseError::MissingGeometryTag)?;
    let close = wkt[open + 1..].find(')')
        .map(|i| open + 1 + i)
        .ok_or(ParseError::UnclosedParenthesis { position: open })?;

    let mut body = &wkt[open + 1..close];
    let mut offset = open + 1;

    // POLYGON ((...)) nests the ring one level deeper
    let leading = body.len() - body.trim_start().len();
    if body[leading..].starts_with('(') {
        offset += leading + 1;
        body = &body[leading + 1..];
    }

    parse_coordinate_list(body, offset, false)
}

/// Body of a MULTIPOINT: first `(` to the last `)`
fn parse_multipoint_body(wkt: &str) -> Result<CoordinateSequence, ParseError> {
    let open = wkt.find('(').ok_or(ParseError::MissingGeometryTag)?;
    let close = match wkt.rfind(')') {
        Some(close) if close > open => close,
        _ => return Err(ParseError::UnclosedParenthesis { position: open }),
    };

    parse_coordinate_list(&wkt[open + 1..close], open + 1, true)
}

/// Split a body on `,` and read each group as one coordinate
///
/// `offset` is the position of `body` in the original WKT, so errors can
/// point at the offending token.
fn parse_coordinate_list(body: &str, offset: usize, strip_group_parens: bool) -> Result<CoordinateSequence, ParseError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut coords = Vec::new();
    let mut position = offset;

    for group in body.split(',') {
        coords.push(parse_pair(group, position, strip_group_parens)?);
        position += group.len() + 1;
    }

    Ok(coords)
}

/// Read an `x y` token
fn parse_pair(group: &str, position: usize, strip_parens: bool) -> Result<Coordinate, ParseError> {
    let position = position + (group.len() - group.trim_start().len());
    let token = group.trim();

    let pair = if strip_parens {
        token.trim_start_matches('(').trim_end_matches(')').trim()
    } else {
        token
    };

    let invalid = || ParseError::InvalidCoordinate {
        token: token.to_string(),
        position,
    };

    let mut parts = pair.split_whitespace();
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(invalid()),
    };

    let x = parse_ordinate(x).ok_or_else(invalid)?;
    let y = parse_ordinate(y).ok_or_else(invalid)?;

    Ok(Coordinate::new(x, y))
}

/// Parse a finite ordinate
fn parse_ordinate(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
