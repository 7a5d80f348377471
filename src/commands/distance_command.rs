//! Point-to-point distance command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::{GeoError, GeoResult};
use crate::geo::Point;
use crate::units::{Distance, DistanceUnit};
use crate::utils::logger::Logger;

/// Command for measuring the distance between two points
pub struct DistanceCommand<'a> {
    from: Point,
    to: Point,
    /// Use the flat-earth approximation
    planar: bool,
    /// Unit to report in, `None` to follow the settings
    unit: Option<DistanceUnit>,
    settings: &'a Settings,
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command from the `distance` subcommand matches
    pub fn new(args: &ArgMatches, settings: &'a Settings, logger: &'a Logger) -> GeoResult<Self> {
        let from = parse_point(args, "from")?;
        let to = parse_point(args, "to")?;

        let unit = args.get_one::<String>("unit")
            .map(|unit| unit.parse::<DistanceUnit>())
            .transpose()?;

        Ok(DistanceCommand {
            from,
            to,
            planar: args.get_flag("planar"),
            unit,
            settings,
            logger,
        })
    }

    /// The measured distance, in the unit it will be reported in
    pub fn measure(&self) -> Distance {
        let distance = if self.planar {
            self.from.planar_distance_to_point(&self.to)
        } else {
            self.from.distance_to_point(&self.to)
        };

        match self.unit {
            Some(unit) => distance.convert(unit),
            None if self.settings.smart_units => distance.smart_convert(),
            None => distance,
        }
    }
}

pub(crate) fn parse_point(args: &ArgMatches, name: &str) -> GeoResult<Point> {
    args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing {} point", name)))?
        .parse::<Point>()
}

impl<'a> Command for DistanceCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        let distance = self.measure();
        let method = if self.planar { "planar" } else { "great-circle" };
        info!("{} distance from {} to {}: {}", method, self.from, self.to, distance);

        self.logger.log(&format!("{} -> {} ({}): {}", self.from, self.to, method, distance))?;
        Ok(distance.to_string())
    }
}
