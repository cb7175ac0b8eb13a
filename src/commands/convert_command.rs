//! Coordinate conversion command
//!
//! Converts a single coordinate pair between the local survey grid and
//! WGS84, in either direction.

use clap::ArgMatches;
use log::info;

use crate::api::GeoWlan;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::parse_coordinate_pair;
use crate::utils::logger::Logger;

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// `x,y` on the local grid to `lat,lng`
    ToGlobal,
    /// `lat,lng` to `x,y` on the local grid
    ToLocal,
}

/// Command for converting one coordinate pair
pub struct ConvertCommand<'a> {
    /// Which way to convert
    direction: ConversionDirection,
    /// Input pair, in the order of the source system
    input: (f64, f64),
    /// Library facade holding the site transform
    api: GeoWlan,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Subcommand matches holding `coordinate`
    /// * `direction` - Conversion direction
    /// * `api` - Configured library facade
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, direction: ConversionDirection, api: GeoWlan, logger: &'a Logger) -> GeoResult<Self> {
        let coordinate = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing --coordinate".to_string()))?;
        let input = parse_coordinate_pair(coordinate)?;

        Ok(ConvertCommand {
            direction,
            input,
            api,
            logger,
        })
    }

    /// Converted pair formatted for output
    pub fn output(&self) -> String {
        let (first, second) = self.input;
        match self.direction {
            ConversionDirection::ToGlobal => {
                let global = self.api.local_to_global(first, second);
                format!("{:.6},{:.6}", global.lat, global.lng)
            }
            ConversionDirection::ToLocal => {
                let local = self.api.global_to_local(first, second);
                format!("{:.3},{:.3}", local.x, local.y)
            }
        }
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let output = self.output();
        info!("Converted {:?} ({}, {}) -> {}", self.direction, self.input.0, self.input.1, output);
        self.logger.log(&format!(
            "{:?} {},{} -> {}",
            self.direction, self.input.0, self.input.1, output
        ))?;

        println!("{}", output);
        Ok(())
    }
}
