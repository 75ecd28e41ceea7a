//! Format conversion command
//!
//! This module implements the command for converting geometry documents
//! between WKT, GeoJSON and display graphics.

use std::str::FromStr;

use clap::ArgMatches;
use log::{debug, info};

use crate::api::WktKit;
use crate::commands::command_traits::Command;
use crate::commands::{input_arg, styles_arg, wkt_input};
use crate::coordinate::parse_epsg_code;
use crate::errors::{WktKitError, WktKitResult};
use crate::geojson::wkt_to_geojson;
use crate::graphics::StyleDefinitions;
use crate::utils::document_utils::{read_document, write_output, Document};
use crate::utils::logger::Logger;
use crate::wkt::parse_geometry;

/// Display CRS for graphics when neither a target nor a source CRS is known
const DEFAULT_DISPLAY_EPSG: u32 = 4326;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Wkt,
    GeoJson,
    Graphic,
}

impl FromStr for OutputFormat {
    type Err = WktKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wkt" => Ok(OutputFormat::Wkt),
            "geojson" | "json" => Ok(OutputFormat::GeoJson),
            "graphic" | "graphics" => Ok(OutputFormat::Graphic),
            other => Err(WktKitError::GenericError(format!("Unknown output format: {}", other))),
        }
    }
}

/// Command for converting a geometry document
pub struct ConvertCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file; stdout when absent
    output_file: Option<String>,
    /// Target format
    format: OutputFormat,
    /// Declared EPSG code of the input
    epsg: Option<String>,
    /// CRS graphics are produced in
    target_epsg: Option<u32>,
    /// Collapse GeoJSON input into a MULTIPOINT
    multipoint: bool,
    /// Symbols for graphic output
    styles: StyleDefinitions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WktKitResult<Self> {
        let format = args.get_one::<String>("format")
            .ok_or_else(|| WktKitError::GenericError("Missing output format. Use --format wkt|geojson|graphic".to_string()))?
            .parse::<OutputFormat>()?;

        let target_epsg = match args.get_one::<String>("proj") {
            Some(code) => Some(parse_epsg_code(code)?),
            None => None,
        };

        Ok(ConvertCommand {
            input_file: input_arg(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            format,
            epsg: args.get_one::<String>("epsg").cloned(),
            target_epsg,
            multipoint: args.get_flag("multipoint"),
            styles: styles_arg(args)?,
            logger,
        })
    }

    /// Convert a document into the text of the target format
    ///
    /// # Arguments
    /// * `document` - The parsed input document
    ///
    /// # Returns
    /// WKT, pretty GeoJSON or a pretty JSON array of graphics
    pub fn convert(&self, document: &Document) -> WktKitResult<String> {
        match self.format {
            OutputFormat::GeoJson => {
                let wkt = match document {
                    Document::Wkt(wkt) => wkt,
                    Document::GeoJson(_) => {
                        return Err(WktKitError::GenericError("Input is already GeoJSON".to_string()))
                    },
                };
                let feature = wkt_to_geojson(wkt, self.epsg.as_deref())?;
                Ok(feature.to_json_pretty()?)
            },
            OutputFormat::Wkt => {
                let conversion = wkt_input(document, self.epsg.as_deref(), self.multipoint)?;
                match document {
                    // Normalize WKT input through the plain-comma writer
                    Document::Wkt(_) => Ok(parse_geometry(&conversion.wkt)?.to_wkt()),
                    Document::GeoJson(_) => Ok(conversion.wkt),
                }
            },
            OutputFormat::Graphic => {
                let conversion = wkt_input(document, self.epsg.as_deref(), self.multipoint)?;
                let declared = conversion.epsg.as_deref().unwrap_or("");
                let target = match (self.target_epsg, declared) {
                    (Some(target), _) => target,
                    (None, "") => DEFAULT_DISPLAY_EPSG,
                    (None, code) => parse_epsg_code(code)?,
                };

                let kit = WktKit::new(target).with_styles(self.styles.clone());
                let graphics = kit.import_wkt(&conversion.wkt, declared)?;
                Ok(serde_json::to_string_pretty(&graphics)?)
            },
        }
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> WktKitResult<()> {
        info!("Converting file {} to {:?}", self.input_file, self.format);

        let document = read_document(&self.input_file)?;
        debug!("Input format: {}", document.format_name());

        let converted = self.convert(&document)?;
        write_output(self.output_file.as_deref(), &converted)?;

        info!("Conversion successful");
        self.logger.log("Conversion successful")?;

        Ok(())
    }
}
