use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod catalog;
mod cli;
mod commands;
mod config;
mod party;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn log_dir() -> PathBuf {
    match std::env::var("ERIDU_DIR") {
        Ok(dir) => PathBuf::from(dir).join("logs"),
        Err(_) => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eridu")
            .join("logs"),
    }
}

/// Filter directives to apply and where they came from.
/// RUST_LOG takes precedence, then --verbose, then config log_level.
fn log_filter(rust_log: Option<String>, verbose: bool, log_level: &LogLevel) -> (String, &'static str) {
    match rust_log {
        Some(spec) => (spec, "RUST_LOG env"),
        None if verbose => ("debug".to_string(), "--verbose"),
        None => (log_level.as_filter().to_string(), "config"),
    }
}

fn setup_logging(log_level: &LogLevel, verbose: bool) -> Result<()> {
    let log_dir = log_dir();
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("eridu.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let (filter, source) = log_filter(std::env::var("RUST_LOG").ok(), verbose, log_level);

    env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!("Log level: {} (from {})", filter, source);
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let catalog = cli.catalog.as_ref();
    match cli.command {
        Commands::Generate {
            filter,
            limit,
            explain,
            format,
        } => commands::generate::run(
            filter,
            limit,
            explain,
            cli::OutputFormat::resolve(format),
            cli.quiet,
            catalog,
            &config,
        ),
        Commands::Agents { action } => commands::agents::run(action, catalog, &config),
        Commands::Disks {
            teams,
            filter,
            top,
            format,
        } => commands::disks::run(teams, filter, top, cli::OutputFormat::resolve(format), catalog, &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level, cli.verbose).context("Failed to setup logging")?;

    info!("Starting eridu with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
