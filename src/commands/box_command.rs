//! Radius bounding box command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::distance_command::parse_point;
use crate::config::Settings;
use crate::errors::{GeoError, GeoResult};
use crate::geo::{BoundingBox, Point};
use crate::units::Distance;
use crate::utils::logger::Logger;

/// Command for building a bounding box around a point
pub struct BoxCommand<'a> {
    center: Point,
    radius: Distance,
    logger: &'a Logger,
}

impl<'a> BoxCommand<'a> {
    /// Create a new box command from the `box` subcommand matches
    pub fn new(args: &ArgMatches, settings: &'a Settings, logger: &'a Logger) -> GeoResult<Self> {
        let center = parse_point(args, "center")?;

        let radius_str = args.get_one::<String>("radius")
            .ok_or_else(|| GeoError::GenericError("Missing radius".to_string()))?;
        let radius = parse_radius(radius_str, settings)?;

        Ok(BoxCommand { center, radius, logger })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.center.find_box_with_radius(self.radius)
    }
}

/// Parse a radius, reading a bare number in the configured default unit
fn parse_radius(radius_str: &str, settings: &Settings) -> GeoResult<Distance> {
    match radius_str.parse::<Distance>() {
        Ok(distance) => Ok(distance),
        Err(GeoError::InvalidDistance(_)) => {
            let magnitude = radius_str.trim().parse::<f64>()
                .map_err(|_| GeoError::InvalidDistance(radius_str.to_string()))?;
            debug!("Bare radius {} read as {}", magnitude, settings.default_unit.name());
            Ok(Distance::new(magnitude, settings.default_unit))
        }
        Err(e) => Err(e),
    }
}

impl<'a> Command for BoxCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        info!("Building box around {} with radius {}", self.center, self.radius);
        let bbox = self.bounding_box();
        self.logger.log_bounding_box(&bbox)?;

        let labels = ["top_left", "top_right", "bottom_left", "bottom_right"];
        let lines: Vec<String> = labels.iter()
            .zip(bbox.corners().iter())
            .map(|(label, corner)| format!("{:<13} {:.6},{:.6}", label, corner.lat, corner.lng))
            .collect();

        Ok(lines.join("\n"))
    }
}
