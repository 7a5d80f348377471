use std::process;
use log::{error, LevelFilter};

use geodist::commands::{build_cli, CommandFactory, GeodistCommandFactory};
use geodist::config::Settings;
use geodist::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(String::as_str);
    let mut settings = match Settings::load(config_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    if matches.get_flag("verbose") {
        settings.log_level = LevelFilter::Debug;
    }

    let logger = match &settings.log_file {
        Some(path) => {
            let logger = match Logger::new(path, settings.log_level) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            };
            if let Err(e) = logger.init_global_logger() {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            logger
        }
        None => {
            // RUST_LOG still overrides the configured level
            env_logger::Builder::new()
                .filter_level(settings.log_level)
                .parse_default_env()
                .init();
            Logger::disabled(settings.log_level)
        }
    };

    let factory = GeodistCommandFactory::new();

    match factory.create_command(&matches, &settings, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
