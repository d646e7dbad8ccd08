//! Command-line interface entry point for `gradecalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradecalc::config::Config;
use gradecalc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gradecalc::{error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Catalog => {
            commands::catalog::run();
            Ok(())
        }
        Command::Semester { subcommand } => commands::semester::run(&subcommand, &config),
        Command::Major {
            semester,
            subcommand,
        } => commands::major::run(&subcommand, semester, &config),
        Command::Language {
            language,
            raw,
            semester,
        } => commands::language::run(language, &raw, semester, &config),
        Command::Culture {
            semester,
            subcommand,
        } => commands::culture::run(&subcommand, semester, &config),
        Command::Summary => commands::summary::run(&config),
        Command::Report { output, format } => {
            commands::report::run(output.as_deref(), &format, &config)
        }
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
