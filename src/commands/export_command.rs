//! KML export command
//!
//! Loads a point file, optionally validates it, and writes a KML document
//! for Google Earth.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{info, warn};

use crate::api::GeoWlan;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::kml::{SkipPolicy, DEFAULT_KML_FILENAME};
use crate::utils::logger::Logger;

/// Command for exporting a point file to KML
pub struct ExportCommand<'a> {
    /// Path to the point file
    input_file: String,
    /// Output path; defaults to the standard file name in the working directory
    output_file: PathBuf,
    /// Run the validator and abort on any issue
    strict: bool,
    /// Library facade configured with the chosen skip policy
    api: GeoWlan,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExportCommand<'a> {
    /// Create a new export command
    pub fn new(args: &ArgMatches, api: GeoWlan, logger: &'a Logger) -> GeoResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = args
            .get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KML_FILENAME));

        let skip_policy = if args.get_flag("keep-zero") {
            SkipPolicy::KeepZero
        } else {
            SkipPolicy::ZeroIsMissing
        };

        Ok(ExportCommand {
            input_file,
            output_file,
            strict: args.get_flag("strict"),
            api: api.with_skip_policy(skip_policy),
            logger,
        })
    }

    /// Where the KML file will be written
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

impl<'a> Command for ExportCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let points = self.api.load_points(&self.input_file)?;
        info!("Exporting {} points from {}", points.len(), self.input_file);

        let filename = self
            .output_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| GeoError::GenericError(format!("Invalid output path: {}", self.output_file.display())))?;

        if self.strict {
            let result = self.api.validate(&points);
            self.logger.log_validation(&self.input_file, &result)?;
            if !result.is_valid() {
                return Err(GeoError::ValidationFailed(result.errors()));
            }
        }

        let file = self.api.export_kml(&points, Some(filename))?;

        if file.skipped_count() > 0 {
            warn!("{} point(s) without coordinates were left out of the export", file.skipped_count());
        }

        file.save_as(&self.output_file)?;
        self.logger.log_export(&file)?;

        println!(
            "Wrote {} placemark(s) to {}",
            file.placemark_count(),
            self.output_file.display()
        );
        Ok(())
    }
}
