//! WKT <-> GeoJSON conversion
//!
//! WKT produced here separates coordinates with `", "`, unlike the plain
//! `","` of [`crate::wkt::to_wkt`]. Downstream consumers compare the literal
//! text, so the two writers stay separate.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::Value;

use super::feature::Feature;
use crate::coordinate::Coordinate;
use crate::errors::{ConversionError, ParseError};
use crate::utils::format_utils::{format_coordinate, join_coordinates};
use crate::wkt::{geometry_kind, parse_coordinates, GeometryKind};

const SEPARATOR: &str = ", ";

lazy_static! {
    // Matches "EPSG:4326" and the OGC URN form "urn:ogc:def:crs:EPSG::4326"
    static ref EPSG_PATTERN: Regex = Regex::new(r"(?i)EPSG::?(\d+)").expect("EPSG pattern is valid");
}

/// WKT text together with the EPSG code found next to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktConversion {
    pub wkt: String,
    /// Bare EPSG code, e.g. `"4326"`
    pub epsg: Option<String>,
}

/// Convert WKT to a GeoJSON Feature
///
/// # Arguments
/// * `wkt` - A `POINT`, `LINESTRING` or `POLYGON`
/// * `epsg` - EPSG code to record in the `crs` member; `None` or an empty
///   string leaves `crs` out
///
/// # Returns
/// The Feature, or `UnsupportedGeometryType` for any other kind
pub fn wkt_to_geojson(wkt: &str, epsg: Option<&str>) -> Result<Feature, ConversionError> {
    let kind = geometry_kind(wkt)?;
    let geometry_type = match &kind {
        GeometryKind::Point => "Point",
        GeometryKind::LineString => "LineString",
        GeometryKind::Polygon => "Polygon",
        other => return Err(ConversionError::UnsupportedGeometryType(other.keyword().to_string())),
    };

    let coords = parse_coordinates(wkt)?;
    let coordinates = match &kind {
        GeometryKind::Point => {
            let point = coords.first()
                .ok_or_else(|| ParseError::EmptyGeometry(kind.keyword().to_string()))?;
            position_value(point)
        },
        GeometryKind::Polygon => Value::Array(vec![positions_value(&coords)]),
        _ => positions_value(&coords),
    };

    let feature = Feature::new(geometry_type, coordinates);
    let feature = match epsg.map(str::trim).filter(|code| !code.is_empty()) {
        Some(code) => feature.with_epsg(code),
        None => feature,
    };

    debug!("Converted {} WKT to GeoJSON {}", kind, geometry_type);
    Ok(feature)
}

/// Convert a GeoJSON Feature or bare geometry object to WKT
///
/// The geometry type is matched case-insensitively. The EPSG code comes
/// from `crs.properties.name` when present.
pub fn geojson_to_wkt(feature: &Value) -> Result<WktConversion, ConversionError> {
    let geometry = feature_geometry(feature)?;
    let geometry_type = geometry_type(geometry)?;

    let wkt = match geometry_type.as_str() {
        "POINT" => {
            let point = read_position(coordinates(geometry)?)?;
            format!("POINT ({})", format_coordinate(&point))
        },
        "LINESTRING" => {
            let line = read_positions(coordinates(geometry)?)?;
            format!("LINESTRING ({})", join_coordinates(&line, SEPARATOR))
        },
        "POLYGON" => {
            let ring = coordinates(geometry)?
                .as_array()
                .and_then(|rings| rings.first())
                .ok_or_else(|| ConversionError::InvalidGeoJson("Polygon has no rings".to_string()))?;
            format!("POLYGON (({}))", join_coordinates(&read_positions(ring)?, SEPARATOR))
        },
        _ => return Err(ConversionError::UnsupportedGeometryType(geometry_type)),
    };

    Ok(WktConversion {
        wkt,
        epsg: extract_epsg(feature),
    })
}

/// Parse GeoJSON text and convert it with [`geojson_to_wkt`]
pub fn geojson_str_to_wkt(text: &str) -> Result<WktConversion, ConversionError> {
    let value: Value = serde_json::from_str(text)?;
    geojson_to_wkt(&value)
}

/// Collapse the Point members of a feature list into one MULTIPOINT
///
/// Members that are not Points, or whose coordinates cannot be read, are
/// skipped. An empty result is `MULTIPOINT ()`. The EPSG code comes from
/// the first feature carrying a usable `crs`, wherever it sits in the list.
/// A `crs` whose name holds no EPSG code, such as
/// `urn:ogc:def:crs:OGC:1.3:CRS84`, is passed over for a later one.
pub fn features_to_multipoint_wkt(features: &[Value]) -> WktConversion {
    let members: Vec<String> = features.iter()
        .filter_map(|feature| {
            let geometry = feature_geometry(feature).ok()?;
            if geometry_type(geometry).ok()? != "POINT" {
                debug!("Skipping non-Point feature in MultiPoint batch");
                return None;
            }
            let point = read_position(geometry.get("coordinates")?).ok()?;
            Some(format!("({})", format_coordinate(&point)))
        })
        .collect();

    WktConversion {
        wkt: format!("MULTIPOINT ({})", members.join(SEPARATOR)),
        epsg: features.iter().find_map(extract_epsg),
    }
}

/// [`features_to_multipoint_wkt`] over a FeatureCollection object or a
/// plain array of features
///
/// A collection-level `crs` is used when no member declares one.
pub fn feature_collection_to_multipoint_wkt(collection: &Value) -> Result<WktConversion, ConversionError> {
    let features = match collection {
        Value::Array(features) => features,
        Value::Object(_) => collection.get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| ConversionError::InvalidGeoJson("FeatureCollection has no features array".to_string()))?,
        _ => return Err(ConversionError::InvalidGeoJson("expected a FeatureCollection or an array".to_string())),
    };

    let mut conversion = features_to_multipoint_wkt(features);
    if conversion.epsg.is_none() {
        conversion.epsg = extract_epsg(collection);
    }
    Ok(conversion)
}

/// Convert any accepted GeoJSON document to WKT
///
/// FeatureCollections and plain arrays go through the MultiPoint batch;
/// Features and bare geometries through [`geojson_to_wkt`].
pub fn geojson_document_to_wkt(document: &Value) -> Result<WktConversion, ConversionError> {
    let is_collection = document.is_array()
        || document.get("type").and_then(Value::as_str) == Some("FeatureCollection");

    if is_collection {
        feature_collection_to_multipoint_wkt(document)
    } else {
        geojson_to_wkt(document)
    }
}

/// Read the EPSG code from `crs.properties.name`
pub fn extract_epsg(feature: &Value) -> Option<String> {
    let name = feature.pointer("/crs/properties/name")?.as_str()?;
    EPSG_PATTERN.captures(name).map(|captures| captures[1].to_string())
}

/// The geometry object of a Feature, or the value itself for a bare geometry
fn feature_geometry(feature: &Value) -> Result<&Value, ConversionError> {
    match feature.get("geometry") {
        Some(geometry) if geometry.is_object() => Ok(geometry),
        _ if feature.get("type").and_then(Value::as_str) == Some("Feature") => {
            Err(ConversionError::InvalidGeoJson("Feature has no geometry".to_string()))
        },
        _ => Ok(feature),
    }
}

/// Uppercased geometry type name
fn geometry_type(geometry: &Value) -> Result<String, ConversionError> {
    geometry.get("type")
        .and_then(Value::as_str)
        .map(str::to_uppercase)
        .ok_or_else(|| ConversionError::InvalidGeoJson("geometry has no type".to_string()))
}

fn coordinates(geometry: &Value) -> Result<&Value, ConversionError> {
    geometry.get("coordinates")
        .ok_or_else(|| ConversionError::InvalidGeoJson("geometry has no coordinates".to_string()))
}

/// Read an `[x, y]` position; extra ordinates are ignored
fn read_position(value: &Value) -> Result<Coordinate, ConversionError> {
    let ordinates: Option<Vec<f64>> = value.as_array()
        .and_then(|items| items.iter().map(Value::as_f64).collect());

    ordinates.as_deref()
        .and_then(Coordinate::from_components)
        .ok_or_else(|| ConversionError::InvalidGeoJson(format!("invalid position {}", value)))
}

fn read_positions(value: &Value) -> Result<Vec<Coordinate>, ConversionError> {
    value.as_array()
        .ok_or_else(|| ConversionError::InvalidGeoJson(format!("expected an array of positions, got {}", value)))?
        .iter()
        .map(read_position)
        .collect()
}

fn position_value(coord: &Coordinate) -> Value {
    Value::from(coord.to_array().to_vec())
}

fn positions_value(coords: &[Coordinate]) -> Value {
    Value::Array(coords.iter().map(position_value).collect())
}
