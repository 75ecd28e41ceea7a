//! GeoJSON bridge
//!
//! Converts WKT to GeoJSON Features and back, carrying the EPSG code through
//! the legacy named `crs` member.

pub mod feature;
pub mod bridge;

pub use feature::{Feature, FeatureGeometry, NamedCrs, NamedCrsProperties};
pub use bridge::{
    extract_epsg, feature_collection_to_multipoint_wkt, features_to_multipoint_wkt, geojson_document_to_wkt,
    geojson_str_to_wkt, geojson_to_wkt, wkt_to_geojson, WktConversion,
};
