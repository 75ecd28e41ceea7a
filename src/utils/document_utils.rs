//! Reading geometry documents and writing converted output

use std::fs;
use std::io::{self, Read};

use log::debug;
use serde_json::Value;

use crate::errors::WktKitResult;

/// Geometry text as read from a file, sorted by format
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Wkt(String),
    GeoJson(Value),
}

impl Document {
    /// Classify text as GeoJSON when it starts with `{` or `[`, otherwise WKT
    pub fn from_text(text: &str) -> WktKitResult<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            Ok(Document::GeoJson(serde_json::from_str(trimmed)?))
        } else {
            Ok(Document::Wkt(trimmed.to_string()))
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            Document::Wkt(_) => "WKT",
            Document::GeoJson(_) => "GeoJSON",
        }
    }
}

/// Read a document from a file, or from stdin when `path` is `-`
pub fn read_document(path: &str) -> WktKitResult<Document> {
    let text = if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    let document = Document::from_text(&text)?;
    debug!("Read {} input from {}", document.format_name(), path);
    Ok(document)
}

/// Write output to a file, or to stdout when no file is given
pub fn write_output(output: Option<&str>, content: &str) -> WktKitResult<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", content))?;
            debug!("Wrote {} bytes to {}", content.len() + 1, path);
        },
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WktKitError;
    use tempfile::tempdir;

    #[test]
    fn test_classifies_wkt() {
        let document = Document::from_text("  POINT (30 10)\n").unwrap();
        assert_eq!(document, Document::Wkt("POINT (30 10)".to_string()));
    }

    #[test]
    fn test_classifies_geojson() {
        let document = Document::from_text(r#"{"type": "Point", "coordinates": [30.0, 10.0]}"#).unwrap();
        assert_eq!(document.format_name(), "GeoJSON");
    }

    #[test]
    fn test_broken_json_is_an_error() {
        assert!(matches!(Document::from_text("{\"type\": "), Err(WktKitError::Json(_))));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wkt");
        let path = path.to_str().unwrap();

        write_output(Some(path), "POINT (1 2)").unwrap();
        assert_eq!(read_document(path).unwrap(), Document::Wkt("POINT (1 2)".to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(read_document("/nonexistent/input.wkt"), Err(WktKitError::Io(_))));
    }
}
