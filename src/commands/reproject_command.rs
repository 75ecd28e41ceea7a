//! Reprojection command
//!
//! Moves the input geometry from its declared CRS to `--proj` and prints
//! the result as WKT. Unlike the library fallback, a failed transformation
//! is an error here.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_arg, wkt_input};
use crate::coordinate::{parse_epsg_code, Reprojector};
use crate::errors::{WktKitError, WktKitResult};
use crate::utils::document_utils::{read_document, write_output, Document};
use crate::utils::logger::Logger;
use crate::wkt::parse_geometry;

/// Command for reprojecting a geometry document
pub struct ReprojectCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file; stdout when absent
    output_file: Option<String>,
    /// Source EPSG code; falls back to the document's `crs`
    from_epsg: Option<String>,
    /// Target EPSG code
    to_epsg: String,
    /// Collapse GeoJSON input into a MULTIPOINT
    multipoint: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ReprojectCommand<'a> {
    /// Create a new reproject command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ReprojectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WktKitResult<Self> {
        let to_epsg = args.get_one::<String>("proj")
            .ok_or_else(|| WktKitError::GenericError("Missing target projection. Use --proj CODE".to_string()))?;

        Ok(ReprojectCommand {
            input_file: input_arg(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            from_epsg: args.get_one::<String>("epsg").cloned(),
            to_epsg: parse_epsg_code(to_epsg)?.to_string(),
            multipoint: args.get_flag("multipoint"),
            logger,
        })
    }

    /// Reproject a document and serialize the result as WKT
    pub fn reproject(&self, document: &Document) -> WktKitResult<String> {
        let conversion = wkt_input(document, self.from_epsg.as_deref(), self.multipoint)?;
        let from_epsg = match conversion.epsg.as_deref() {
            Some(code) => parse_epsg_code(code)?.to_string(),
            None => return Err(WktKitError::GenericError(
                "Source CRS unknown. Use --epsg CODE or add a crs member".to_string()
            )),
        };

        let geometry = parse_geometry(&conversion.wkt)?;
        let coords = Reprojector::new()
            .try_reproject(geometry.coordinates(), &from_epsg, &self.to_epsg)
            .map_err(|failure| WktKitError::Transform(failure.reason))?;

        info!("Reprojected {} coordinates from EPSG:{} to EPSG:{}", coords.len(), from_epsg, self.to_epsg);
        Ok(geometry.with_coordinates(coords).to_wkt())
    }
}

impl<'a> Command for ReprojectCommand<'a> {
    fn execute(&self) -> WktKitResult<()> {
        info!("Reprojecting file: {}", self.input_file);

        let document = read_document(&self.input_file)?;
        let wkt = self.reproject(&document)?;
        write_output(self.output_file.as_deref(), &wkt)?;

        self.logger.log("Reprojection successful")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransformError;
    use serde_json::json;

    fn command<'a>(logger: &'a Logger, from_epsg: Option<&str>, to_epsg: &str) -> ReprojectCommand<'a> {
        ReprojectCommand {
            input_file: "-".to_string(),
            output_file: None,
            from_epsg: from_epsg.map(str::to_string),
            to_epsg: to_epsg.to_string(),
            multipoint: false,
            logger,
        }
    }

    #[test]
    fn test_same_crs_normalizes_text() {
        let logger = Logger::disabled();
        let document = Document::Wkt("POINT (30.50 10)".to_string());

        assert_eq!(command(&logger, Some("4326"), "4326").reproject(&document).unwrap(), "POINT (30.5 10)");
    }

    #[test]
    fn test_source_crs_from_geojson() {
        let logger = Logger::disabled();
        let document = Document::GeoJson(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
            "crs": { "type": "name", "properties": { "name": "EPSG:3857" } }
        }));

        assert_eq!(command(&logger, None, "3857").reproject(&document).unwrap(), "POINT (1 2)");
    }

    #[test]
    fn test_missing_source_crs_is_an_error() {
        let logger = Logger::disabled();
        let document = Document::Wkt("POINT (1 2)".to_string());
        assert!(command(&logger, None, "3857").reproject(&document).is_err());
    }

    #[test]
    fn test_invalid_source_crs_is_an_error() {
        let logger = Logger::disabled();
        let document = Document::Wkt("POINT (1 2)".to_string());
        let result = command(&logger, Some("abc"), "3857").reproject(&document);

        assert!(matches!(result, Err(WktKitError::Transform(TransformError::UnknownCrs(_)))));
    }
}
