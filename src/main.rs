use std::process;

use log::{error, LevelFilter};

use geowlan::commands::{build_cli, check_log_paths, CommandFactory, GeoWlanCommandFactory};
use geowlan::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = check_log_paths(&matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let logger = match matches.get_one::<String>("audit-log") {
        Some(audit_file) => match Logger::new(audit_file) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing audit log: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = GeoWlanCommandFactory::new();
    let command_result = factory.create_command(&matches, &logger);

    match command_result {
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
