pub mod coordinate;
pub mod wkt;
pub mod geojson;
pub mod graphics;
pub mod errors;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::WktKit;

pub use coordinate::{reproject, Coordinate, CoordinateSequence, CoordinateSystem, CrsTransformer, Reprojector};
pub use errors::{ConversionError, ParseError, TransformError, WktKitError, WktKitResult};
pub use geojson::{features_to_multipoint_wkt, geojson_to_wkt, wkt_to_geojson, Feature, WktConversion};
pub use graphics::{build_linestring, build_multipoint, build_point, build_polygon, Graphic};
pub use wkt::{geometry_kind, parse_coordinates, parse_geometry, to_wkt, Geometry, GeometryKind};
