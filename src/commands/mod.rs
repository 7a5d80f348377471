//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod cli;
pub mod convert_command;
pub mod distance_command;
pub mod box_command;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use convert_command::ConvertCommand;
pub use distance_command::DistanceCommand;
pub use box_command::BoxCommand;

use clap::ArgMatches;
use crate::config::Settings;
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// Dispatches on the subcommand name and hands the subcommand's own
/// matches to the command.
pub struct GeodistCommandFactory;

impl GeodistCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeodistCommandFactory
    }
}

impl Default for GeodistCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeodistCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings, logger: &'a Logger)
        -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("convert", sub)) => Ok(Box::new(ConvertCommand::new(sub, settings, logger)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, settings, logger)?)),
            Some(("box", sub)) => Ok(Box::new(BoxCommand::new(sub, settings, logger)?)),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}
