//! Distance conversion command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::{GeoError, GeoResult};
use crate::units::{Distance, DistanceUnit};
use crate::utils::logger::Logger;

/// Command for converting a distance between units
pub struct ConvertCommand<'a> {
    /// Distance to convert
    distance: Distance,
    /// Target unit, `None` to let smart conversion decide
    target: Option<DistanceUnit>,
    /// Settings for this run
    settings: &'a Settings,
    /// Logger for recording results
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Matches for the `convert` subcommand
    /// * `settings` - Settings for this run
    /// * `logger` - Logger for recording results
    pub fn new(args: &ArgMatches, settings: &'a Settings, logger: &'a Logger) -> GeoResult<Self> {
        let distance = args.get_one::<String>("distance")
            .ok_or_else(|| GeoError::GenericError("Missing distance".to_string()))?
            .parse::<Distance>()?;

        let target = args.get_one::<String>("to")
            .map(|unit| unit.parse::<DistanceUnit>())
            .transpose()?;

        Ok(ConvertCommand {
            distance,
            target,
            settings,
            logger,
        })
    }

    /// The converted distance
    pub fn converted(&self) -> Distance {
        match self.target {
            Some(unit) => self.distance.convert(unit),
            None if self.settings.smart_units => self.distance.smart_convert(),
            None => self.distance,
        }
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        let converted = self.converted();
        info!("Converted {} to {}", self.distance, converted);

        let output = format!("{} = {}", self.distance, converted);
        self.logger.log(&output)?;
        Ok(output)
    }
}
