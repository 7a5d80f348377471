//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use clap::ArgMatches;

use crate::config::Settings;
use crate::errors::GeoResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation.
/// `render` does the work and produces the text to show, so commands can
/// be exercised without capturing stdout.
pub trait Command {
    /// Run the command and return its output
    fn render(&self) -> GeoResult<String>;

    /// Execute the command, printing its output
    fn execute(&self) -> GeoResult<()> {
        let output = self.render()?;
        println!("{}", output);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - Top-level CLI argument matches from clap
    /// * `settings` - Settings loaded for this run
    /// * `logger` - Logger for recording results
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings, logger: &'a Logger)
        -> GeoResult<Box<dyn Command + 'a>>;
}
