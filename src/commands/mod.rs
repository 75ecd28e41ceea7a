//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod convert_command;
pub mod reproject_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use convert_command::{ConvertCommand, OutputFormat};
pub use reproject_command::ReprojectCommand;

use clap::ArgMatches;
use crate::errors::{WktKitError, WktKitResult};
use crate::geojson::{feature_collection_to_multipoint_wkt, geojson_document_to_wkt, WktConversion};
use crate::graphics::StyleDefinitions;
use crate::utils::document_utils::Document;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct WktKitCommandFactory;

impl WktKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        WktKitCommandFactory
    }
}

impl Default for WktKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for WktKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> WktKitResult<Box<dyn Command + 'a>> {
        if args.get_flag("convert") && args.get_flag("reproject") {
            return Err(WktKitError::GenericError("--convert and --reproject cannot be combined".to_string()));
        }

        if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else if args.get_flag("reproject") {
            Ok(Box::new(ReprojectCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Required positional input path
pub(crate) fn input_arg(args: &ArgMatches) -> WktKitResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| WktKitError::GenericError("Missing input file".to_string()))
}

/// Graphic styles from `--styles`, or the embedded defaults
pub(crate) fn styles_arg(args: &ArgMatches) -> WktKitResult<StyleDefinitions> {
    match args.get_one::<String>("styles") {
        Some(path) => StyleDefinitions::from_file(path),
        None => Ok(StyleDefinitions::builtin().clone()),
    }
}

/// WKT text and declared CRS of an input document
///
/// `--epsg` overrides any `crs` member found in GeoJSON input. With
/// `multipoint` set, GeoJSON input always goes through the MultiPoint batch.
pub(crate) fn wkt_input(document: &Document, epsg: Option<&str>, multipoint: bool) -> WktKitResult<WktConversion> {
    let mut conversion = match document {
        Document::Wkt(wkt) => WktConversion { wkt: wkt.clone(), epsg: None },
        Document::GeoJson(value) if multipoint => feature_collection_to_multipoint_wkt(value)?,
        Document::GeoJson(value) => geojson_document_to_wkt(value)?,
    };

    if let Some(code) = epsg {
        conversion.epsg = Some(code.trim().to_string());
    }
    Ok(conversion)
}
