//! Well-Known-Text reading and writing
//!
//! Covers `POINT`, `LINESTRING`, single-ring `POLYGON` and `MULTIPOINT`.
//! Other kinds are reported as unsupported rather than approximated.

pub mod types;
pub mod parser;
pub mod writer;

pub use types::{Geometry, GeometryKind};
pub use parser::{geometry_kind, parse_coordinates, parse_geometry};
pub use writer::to_wkt;
