//! Coordinate Reference System handling
//!
//! EPSG codes cross the public API as bare numeric strings (`"4326"`). The
//! `EPSG:` prefix is only added for identifiers handed to the projection
//! service and for GeoJSON `crs` members. An empty string means the CRS is
//! unspecified and is never replaced with a default here.

use crate::errors::TransformError;

/// Prefix used in CRS identifiers
pub const EPSG_PREFIX: &str = "EPSG:";

/// CRSs offered to users when declaring the CRS of an input geometry
pub const KNOWN_CRS: &[(&str, &str)] = &[
    ("4326", "EPSG:4326 - WGS 84 (lat/lon)"),
    ("3857", "EPSG:3857 - Web Mercator"),
    ("102100", "EPSG:102100 - Web Mercator (Aux)"),
    ("27700", "EPSG:27700 - OSGB36 / British National Grid"),
];

/// Identifier for common coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326)
    WGS84,
    /// Web Mercator (EPSG:3857, also published as 102100 and 900913)
    WebMercator,
    /// UTM Zone (EPSG:326xx for northern hemisphere, 327xx for southern)
    UTM(u8, bool),
    /// Other EPSG code
    Other(u32),
}

impl CoordinateSystem {
    /// Create a coordinate system from a numeric EPSG code
    pub fn from_epsg(epsg: u32) -> CoordinateSystem {
        match epsg {
            4326 => CoordinateSystem::WGS84,
            3857 | 3785 | 102100 | 900913 => CoordinateSystem::WebMercator,
            32601..=32660 => CoordinateSystem::UTM((epsg - 32600) as u8, true),
            32701..=32760 => CoordinateSystem::UTM((epsg - 32700) as u8, false),
            _ => CoordinateSystem::Other(epsg),
        }
    }

    /// Parse a coordinate system from a bare code (`"4326"`) or an
    /// identifier (`"EPSG:4326"`)
    pub fn from_epsg_str(epsg: &str) -> Result<CoordinateSystem, TransformError> {
        parse_epsg_code(epsg).map(Self::from_epsg)
    }

    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::WebMercator => 3857,
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    32600 + *zone as u32
                } else {
                    32700 + *zone as u32
                }
            },
            CoordinateSystem::Other(code) => *code,
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    format!("UTM Zone {}N (EPSG:{})", zone, self.epsg_code())
                } else {
                    format!("UTM Zone {}S (EPSG:{})", zone, self.epsg_code())
                }
            },
            CoordinateSystem::Other(code) => {
                match KNOWN_CRS.iter().find(|(value, _)| value.parse::<u32>().ok() == Some(*code)) {
                    Some((_, label)) => label.to_string(),
                    None => format!("EPSG:{}", code),
                }
            },
        }
    }
}

/// Build the `EPSG:<code>` identifier for a bare EPSG code
pub fn crs_identifier(epsg: &str) -> String {
    format!("{}{}", EPSG_PREFIX, epsg.trim())
}

/// Read the numeric code from `"4326"` or `"EPSG:4326"`
pub fn parse_epsg_code(crs: &str) -> Result<u32, TransformError> {
    let trimmed = crs.trim();
    let code = match trimmed.get(..EPSG_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(EPSG_PREFIX) => &trimmed[EPSG_PREFIX.len()..],
        _ => trimmed,
    };

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransformError::UnknownCrs(crs.to_string()));
    }

    code.parse::<u32>()
        .map_err(|_| TransformError::UnknownCrs(crs.to_string()))
}

/// Check that an EPSG code is 3 to 6 ASCII digits
pub fn is_valid_epsg(epsg: &str) -> bool {
    (3..=6).contains(&epsg.len()) && epsg.bytes().all(|b| b.is_ascii_digit())
}
