//! Coordinate pair and coordinate sequence types

use serde::Serialize;

/// A 2D coordinate pair
///
/// Geographic systems store longitude in `x` and latitude in `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
}

/// An ordered list of coordinates; order defines the shape
pub type CoordinateSequence = Vec<Coordinate>;

impl Coordinate {
    /// Create a new coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Build a coordinate from a raw component row such as `[x, y]`
    ///
    /// Returns `None` when the row has fewer than two components.
    /// Components past the second are ignored.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y, ..] => Some(Coordinate::new(*x, *y)),
            _ => None,
        }
    }

    /// The coordinate as an `[x, y]` array
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Minimum and maximum ordinates of a coordinate sequence as
/// `(min_x, min_y, max_x, max_y)`, or `None` for an empty sequence
pub fn extent(coords: &[Coordinate]) -> Option<(f64, f64, f64, f64)> {
    let first = coords.first()?;
    let init = (first.x, first.y, first.x, first.y);

    Some(coords.iter().fold(init, |(min_x, min_y, max_x, max_y), c| {
        (min_x.min(c.x), min_y.min(c.y), max_x.max(c.x), max_y.max(c.y))
    }))
}
