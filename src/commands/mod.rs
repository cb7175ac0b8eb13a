//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod export_command;
pub mod validate_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::{ConversionDirection, ConvertCommand};
pub use export_command::ExportCommand;
pub use validate_command::ValidateCommand;

use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::api::GeoWlan;
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    let coordinate_arg = |help: &'static str| {
        Arg::new("coordinate")
            .short('c')
            .long("coordinate")
            .help(help)
            .value_name("A,B")
            .allow_hyphen_values(true)
            .required(true)
    };

    ClapCommand::new("geowlan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert mine-grid coordinates and export survey points to KML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("calibration")
                .long("calibration")
                .help("Calibration TOML file (defaults to the compiled-in site calibration)")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of the console")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("audit-log")
                .long("audit-log")
                .help("Record conversions, validations and exports in this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("to-global")
                .about("Convert a local grid position to latitude/longitude")
                .arg(coordinate_arg("Local grid coordinate as 'x,y'")),
        )
        .subcommand(
            ClapCommand::new("to-local")
                .about("Convert latitude/longitude to a local grid position")
                .arg(coordinate_arg("Geographic coordinate as 'lat,lng'")),
        )
        .subcommand(
            ClapCommand::new("validate")
                .about("Check a point file before export")
                .arg(Arg::new("input").help("Point TOML file").required(true).index(1)),
        )
        .subcommand(
            ClapCommand::new("export")
                .about("Export a point file to KML for Google Earth")
                .arg(Arg::new("input").help("Point TOML file").required(true).index(1))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output KML file (default: geowlan_points.kml)")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Validate points first and abort on any issue")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-zero")
                        .long("keep-zero")
                        .help("Treat a coordinate of 0 as a real value instead of missing")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Reject a `--log-file` and `--audit-log` pointing at the same file.
///
/// Both loggers truncate their file on open.
pub fn check_log_paths(args: &ArgMatches) -> GeoResult<()> {
    let log_file = args.get_one::<String>("log-file").map(Path::new);
    let audit_log = args.get_one::<String>("audit-log").map(Path::new);

    match (log_file, audit_log) {
        (Some(log_file), Some(audit_log)) if log_file == audit_log => Err(GeoError::GenericError(format!(
            "--log-file and --audit-log must be different files: {}",
            log_file.display()
        ))),
        _ => Ok(()),
    }
}

/// Factory for creating command instances based on CLI arguments
pub struct GeoWlanCommandFactory;

impl GeoWlanCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoWlanCommandFactory
    }

    fn api(args: &ArgMatches) -> GeoResult<GeoWlan> {
        match args.get_one::<String>("calibration") {
            Some(path) => GeoWlan::from_calibration_file(path),
            None => Ok(GeoWlan::new()),
        }
    }
}

impl Default for GeoWlanCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoWlanCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        let api = Self::api(args)?;

        match args.subcommand() {
            Some(("to-global", sub)) => Ok(Box::new(ConvertCommand::new(sub, ConversionDirection::ToGlobal, api, logger)?)),
            Some(("to-local", sub)) => Ok(Box::new(ConvertCommand::new(sub, ConversionDirection::ToLocal, api, logger)?)),
            Some(("validate", sub)) => Ok(Box::new(ValidateCommand::new(sub, api, logger)?)),
            Some(("export", sub)) => Ok(Box::new(ExportCommand::new(sub, api, logger)?)),
            Some((other, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", other))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}
