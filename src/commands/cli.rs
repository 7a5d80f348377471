//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command tree
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geodist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert distances and measure between lat/lng points")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file (defaults to ./geodist.toml when present)")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("convert")
                .about("Convert a distance, picking a readable unit unless --to is given")
                .arg(
                    Arg::new("distance")
                        .help("Distance such as '12.5 mi' or '18in'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target unit (in, ft, mi)")
                        .value_name("UNIT"),
                ),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two points")
                .arg(
                    Arg::new("from")
                        .help("First point as 'lat,lng'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .help("Second point as 'lat,lng'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2),
                )
                .arg(
                    Arg::new("planar")
                        .long("planar")
                        .help("Use the flat-earth approximation instead")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .help("Report in this unit (in, ft, mi)")
                        .value_name("UNIT"),
                ),
        )
        .subcommand(
            ClapCommand::new("box")
                .about("Bounding box reaching a radius around a point")
                .arg(
                    Arg::new("center")
                        .help("Center point as 'lat,lng'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("radius")
                        .help("Radius such as '5 mi'; bare numbers use the default unit")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2),
                ),
        )
}
