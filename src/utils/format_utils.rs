//! Numeric formatting utilities
//!
//! Coordinates are written with the shortest decimal text that reads back to
//! the same `f64`, without trailing zeros or exponent notation.

use crate::coordinate::Coordinate;

/// Format a single ordinate
///
/// Negative zero is written as `0`.
pub fn format_ordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Format a coordinate as `x y`
pub fn format_coordinate(coord: &Coordinate) -> String {
    format!("{} {}", format_ordinate(coord.x), format_ordinate(coord.y))
}

/// Format a coordinate sequence as `x1 y1<sep>x2 y2...`
pub fn join_coordinates(coords: &[Coordinate], separator: &str) -> String {
    coords.iter()
        .map(format_coordinate)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ordinate() {
        assert_eq!(format_ordinate(30.0), "30");
        assert_eq!(format_ordinate(-122.4194), "-122.4194");
        assert_eq!(format_ordinate(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_ordinate(-0.0), "0");
        assert_eq!(format_ordinate(3658644.33), "3658644.33");
        assert_eq!(format_ordinate(20037508.342789244), "20037508.342789244");
    }

    #[test]
    fn test_join_coordinates() {
        let coords = vec![Coordinate::new(30.0, 10.0), Coordinate::new(10.0, 30.0)];
        assert_eq!(join_coordinates(&coords, ","), "30 10,10 30");
        assert_eq!(join_coordinates(&coords, ", "), "30 10, 10 30");
        assert_eq!(join_coordinates(&[], ","), "");
    }
}
