//! Default symbols for display graphics
//!
//! The defaults ship in `graphic_styles.toml`, embedded at build time and
//! parsed once. A different file can be loaded with
//! [`StyleDefinitions::from_file`].

use std::fs;

use lazy_static::lazy_static;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{WktKitError, WktKitResult};

lazy_static! {
    static ref DEFAULT_STYLES: StyleDefinitions = {
        let content = include_str!("../../graphic_styles.toml");
        StyleDefinitions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse graphic style definitions: {}", e);
            StyleDefinitions::default()
        })
    };
}

/// An RGBA color; alpha is in `0..=1`
pub type Color = [f64; 4];

/// Outline drawn around markers and fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub style: String,
    pub color: Color,
    pub size: f64,
    pub outline: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub style: String,
    pub color: Color,
    pub outline: Outline,
}

/// Symbol handed to the rendering layer with each graphic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Symbol {
    SimpleMarker(MarkerStyle),
    SimpleLine(LineStyle),
    SimpleFill(FillStyle),
}

/// One symbol per geometry family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinitions {
    pub marker: MarkerStyle,
    pub line: LineStyle,
    pub fill: FillStyle,
}

impl Default for StyleDefinitions {
    fn default() -> Self {
        StyleDefinitions {
            marker: MarkerStyle {
                style: "circle".to_string(),
                color: [0.0, 122.0, 255.0, 1.0],
                size: 8.0,
                outline: Outline { color: [255.0, 255.0, 255.0, 1.0], width: 2.0 },
            },
            line: LineStyle {
                color: [226.0, 119.0, 40.0, 1.0],
                width: 4.0,
            },
            fill: FillStyle {
                style: "solid".to_string(),
                color: [186.0, 46.0, 34.0, 0.5],
                outline: Outline { color: [255.0, 0.0, 0.0, 1.0], width: 3.0 },
            },
        }
    }
}

impl StyleDefinitions {
    /// Parse style definitions from a TOML string
    pub fn from_str(content: &str) -> WktKitResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load style definitions from a TOML file
    pub fn from_file(path: &str) -> WktKitResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WktKitError::GenericError(format!("Failed to read style file {}: {}", path, e)))?;
        Self::from_str(&content)
    }

    /// The embedded defaults
    pub fn builtin() -> &'static StyleDefinitions {
        &DEFAULT_STYLES
    }

    pub fn marker_symbol(&self) -> Symbol {
        Symbol::SimpleMarker(self.marker.clone())
    }

    pub fn line_symbol(&self) -> Symbol {
        Symbol::SimpleLine(self.line.clone())
    }

    pub fn fill_symbol(&self) -> Symbol {
        Symbol::SimpleFill(self.fill.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_styles_match_defaults() {
        let embedded = StyleDefinitions::from_str(include_str!("../../graphic_styles.toml")).unwrap();
        assert_eq!(&embedded, StyleDefinitions::builtin());
        assert_eq!(embedded, StyleDefinitions::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(StyleDefinitions::from_str("marker = 3"), Err(WktKitError::Style(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(StyleDefinitions::from_file("/nonexistent/styles.toml").is_err());
    }

    #[test]
    fn test_symbol_serializes_with_type_tag() {
        let symbol = StyleDefinitions::default().line_symbol();
        let value = serde_json::to_value(&symbol).unwrap();

        assert_eq!(value["type"], "simple-line");
        assert_eq!(value["width"], 4.0);
    }
}
