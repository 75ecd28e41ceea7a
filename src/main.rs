use clap::{Arg, Command as ClapCommand, ArgAction};
use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use wktkit::utils::logger::Logger;
use wktkit::commands::{CommandFactory, WktKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("WktKit")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Analyze, convert and reproject WKT and GeoJSON geometries")
        .arg(
            Arg::new("input")
                .help("Input WKT or GeoJSON file ('-' reads stdin)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Convert to a different format (see --format)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reproject")
                .short('r')
                .long("reproject")
                .help("Reproject the geometry from --epsg to --proj and print WKT")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Target format for conversion (wkt, geojson, graphic)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("epsg")
                .long("epsg")
                .help("EPSG code the input is written in (e.g., 4326 for WGS84)")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("proj")
                .long("proj")
                .help("Target projection EPSG code (e.g., 3857 for Web Mercator)")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("multipoint")
                .long("multipoint")
                .help("Collapse the Point features of GeoJSON input into one MULTIPOINT")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("styles")
                .long("styles")
                .help("TOML file with marker, line and fill symbols for graphic output")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Command log file")
                .value_name("FILE")
                .default_value("wktkit.log")
                .required(false),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("wktkit.log");

    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    let global_log_file = Path::new(log_file).with_extension("global.log");
    if let Err(e) = Logger::init_global_logger(&global_log_file.to_string_lossy(), level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = WktKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
