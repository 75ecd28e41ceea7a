//! WKT writer
//!
//! Coordinates are joined with a bare `,` (`LINESTRING (30 10,10 30)`). The
//! GeoJSON bridge writes its own WKT with `", "` and the two outputs are kept
//! textually distinct.

use log::debug;

use super::types::Geometry;
use crate::utils::format_utils::{format_coordinate, join_coordinates};

const SEPARATOR: &str = ",";

/// Serialize a geometry descriptor to WKT
///
/// # Arguments
/// * `geometry` - The descriptor, or `None` when there is no geometry yet
///
/// # Returns
/// The WKT text, or an empty string for `None` and for descriptors without
/// coordinates
pub fn to_wkt(geometry: Option<&Geometry>) -> String {
    let geometry = match geometry {
        Some(geometry) => geometry,
        None => return String::new(),
    };

    let wkt = match geometry {
        Geometry::Point(coord) => format!("POINT ({})", format_coordinate(coord)),
        Geometry::LineString(coords) if !coords.is_empty() => {
            format!("LINESTRING ({})", join_coordinates(coords, SEPARATOR))
        },
        Geometry::Polygon(ring) if !ring.is_empty() => {
            format!("POLYGON (({}))", join_coordinates(ring, SEPARATOR))
        },
        Geometry::MultiPoint(points) if !points.is_empty() => {
            let members = points.iter()
                .map(|point| format!("({})", format_coordinate(point)))
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            format!("MULTIPOINT ({})", members)
        },
        _ => String::new(),
    };

    debug!("Serialized {} to WKT ({} bytes)", geometry.kind(), wkt.len());
    wkt
}
