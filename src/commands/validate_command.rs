//! Point file validation command

use clap::ArgMatches;
use log::info;

use crate::api::GeoWlan;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::points::ValidationResult;
use crate::utils::logger::Logger;

/// Command for validating a point file without exporting it
pub struct ValidateCommand<'a> {
    /// Path to the point file
    input_file: String,
    /// Library facade
    api: GeoWlan,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ValidateCommand<'a> {
    /// Create a new validate command
    pub fn new(args: &ArgMatches, api: GeoWlan, logger: &'a Logger) -> GeoResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(ValidateCommand {
            input_file,
            api,
            logger,
        })
    }

    /// Load and validate the point file
    pub fn run(&self) -> GeoResult<ValidationResult> {
        let points = self.api.load_points(&self.input_file)?;
        Ok(self.api.validate(&points))
    }
}

impl<'a> Command for ValidateCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let result = self.run()?;
        self.logger.log_validation(&self.input_file, &result)?;

        if result.is_valid() {
            info!("{} is valid", self.input_file);
            println!("{}: OK", self.input_file);
            return Ok(());
        }

        Err(GeoError::ValidationFailed(result.errors()))
    }
}
