//! Geometry analysis command
//!
//! This module implements the command for describing a WKT or GeoJSON
//! document: its geometry kind, coordinate count, extent and declared CRS.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{input_arg, wkt_input};
use crate::coordinate::{extent, is_valid_epsg, CoordinateSystem};
use crate::errors::WktKitResult;
use crate::utils::document_utils::{read_document, write_output};
use crate::utils::format_utils::format_ordinate;
use crate::utils::logger::Logger;
use crate::wkt::{geometry_kind, parse_geometry};

/// Command for analyzing a geometry document
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Declared EPSG code overriding the document's own
    epsg: Option<String>,
    /// Collapse GeoJSON input into a MULTIPOINT
    multipoint: bool,
    /// Report destination; stdout when absent
    output_file: Option<String>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WktKitResult<Self> {
        Ok(AnalyzeCommand {
            input_file: input_arg(args)?,
            epsg: args.get_one::<String>("epsg").cloned(),
            multipoint: args.get_flag("multipoint"),
            output_file: args.get_one::<String>("output").cloned(),
            verbose: args.get_flag("verbose"),
            logger,
        })
    }

    /// Build the analysis report for WKT text and its declared CRS
    ///
    /// # Arguments
    /// * `format` - Name of the input format
    /// * `wkt` - Geometry text
    /// * `epsg` - Declared EPSG code, if any
    ///
    /// # Returns
    /// The report lines, or a parse error for a supported kind
    pub fn report(format: &str, wkt: &str, epsg: Option<&str>) -> WktKitResult<Vec<String>> {
        let mut lines = vec![format!("Format: {}", format)];

        let kind = geometry_kind(wkt)?;
        if !kind.is_supported() {
            lines.push(format!("Geometry: {} (unsupported)", kind));
            lines.push(format!("CRS: {}", describe_crs(epsg)));
            return Ok(lines);
        }

        let geometry = parse_geometry(wkt)?;
        let coords = geometry.coordinates();
        lines.push(format!("Geometry: {}", kind));
        lines.push(format!("Coordinates: {}", coords.len()));

        match extent(coords) {
            Some((min_x, min_y, max_x, max_y)) => lines.push(format!(
                "Extent: {} {}, {} {}",
                format_ordinate(min_x), format_ordinate(min_y), format_ordinate(max_x), format_ordinate(max_y)
            )),
            None => lines.push("Extent: empty".to_string()),
        }

        lines.push(format!("CRS: {}", describe_crs(epsg)));
        Ok(lines)
    }
}

/// Human-readable CRS line
fn describe_crs(epsg: Option<&str>) -> String {
    match epsg.map(str::trim).filter(|code| !code.is_empty()) {
        None => "unspecified".to_string(),
        Some(code) if !is_valid_epsg(code) => format!("{} (not a valid EPSG code)", code),
        Some(code) => match CoordinateSystem::from_epsg_str(code) {
            Ok(system) => system.description(),
            Err(_) => format!("EPSG:{}", code),
        },
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> WktKitResult<()> {
        info!("Analyzing file: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let document = read_document(&self.input_file)?;
        let conversion = wkt_input(&document, self.epsg.as_deref(), self.multipoint)?;
        debug!("Analyzing WKT: {}", conversion.wkt);

        let lines = Self::report(document.format_name(), &conversion.wkt, conversion.epsg.as_deref())?;
        for line in &lines {
            info!("  {}", line);
        }
        write_output(self.output_file.as_deref(), &lines.join("\n"))?;

        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ParseError, WktKitError};

    #[test]
    fn test_linestring_report() {
        let lines = AnalyzeCommand::report("WKT", "LINESTRING (30 10, 10 30, 40 40)", Some("4326")).unwrap();

        assert_eq!(lines, vec![
            "Format: WKT",
            "Geometry: LINESTRING",
            "Coordinates: 3",
            "Extent: 10 10, 40 40",
            "CRS: WGS 84 (EPSG:4326)",
        ]);
    }

    #[test]
    fn test_unsupported_kind_is_reported() {
        let lines = AnalyzeCommand::report("WKT", "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)))", None).unwrap();

        assert_eq!(lines[1], "Geometry: MULTIPOLYGON (unsupported)");
        assert_eq!(lines[2], "CRS: unspecified");
    }

    #[test]
    fn test_crs_descriptions() {
        assert_eq!(describe_crs(Some("27700")), "EPSG:27700 - OSGB36 / British National Grid");
        assert_eq!(describe_crs(Some("102100")), "Web Mercator (EPSG:3857)");
        assert_eq!(describe_crs(Some("43")), "43 (not a valid EPSG code)");
        assert_eq!(describe_crs(Some(" ")), "unspecified");
    }

    #[test]
    fn test_parse_errors_propagate() {
        let result = AnalyzeCommand::report("WKT", "POINT 30 10", None);
        assert!(matches!(result, Err(WktKitError::Parse(ParseError::MissingGeometryTag))));
    }
}
