//! GeoJSON Feature types produced by the bridge

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coordinate::crs_identifier;

pub const FEATURE_TYPE: &str = "Feature";
pub const NAMED_CRS_TYPE: &str = "name";

/// A GeoJSON Feature with an optional legacy named `crs` member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: FeatureGeometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<NamedCrs>,
}

/// The `geometry` member of a Feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGeometry {
    /// GeoJSON type name, e.g. `Point`
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// Nested coordinate arrays
    pub coordinates: Value,
}

/// `{ "type": "name", "properties": { "name": "EPSG:<code>" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCrs {
    #[serde(rename = "type")]
    pub crs_type: String,
    pub properties: NamedCrsProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCrsProperties {
    pub name: String,
}

impl NamedCrs {
    /// Named CRS for a bare EPSG code such as `"4326"`
    pub fn from_epsg(epsg: &str) -> Self {
        NamedCrs {
            crs_type: NAMED_CRS_TYPE.to_string(),
            properties: NamedCrsProperties { name: crs_identifier(epsg) },
        }
    }
}

impl Feature {
    /// Feature with empty properties and no CRS
    pub fn new(geometry_type: &str, coordinates: Value) -> Self {
        Feature {
            feature_type: FEATURE_TYPE.to_string(),
            geometry: FeatureGeometry {
                geometry_type: geometry_type.to_string(),
                coordinates,
            },
            properties: Map::new(),
            crs: None,
        }
    }

    /// Attach a named CRS for the given EPSG code
    pub fn with_epsg(mut self, epsg: &str) -> Self {
        self.crs = Some(NamedCrs::from_epsg(epsg));
        self
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
