//! Display graphics for the rendering layer
//!
//! Wraps coordinate rows into geometry descriptors with a CRS and a default
//! symbol. Nothing here draws; a renderer consumes the result.

pub mod builder;
pub mod styles;

pub use builder::{
    build_linestring, build_multipoint, build_point, build_polygon, Graphic, GraphicBuilder, SpatialReference,
};
pub use styles::{Color, FillStyle, LineStyle, MarkerStyle, Outline, StyleDefinitions, Symbol};
