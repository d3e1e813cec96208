use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "eridu Configuration".bold());
            println!();

            println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
            match config.catalog_path() {
                Some(path) => println!("{}: {}", "catalog".cyan(), path.display()),
                None => println!("{}: {}", "catalog".cyan(), "(built-in)".dimmed()),
            }
            println!();

            println!("{}:", "generator".cyan());
            println!("  strict: {}", config.generator.strict);
            println!("  limit: {}", config.generator.limit);
            println!();

            println!("{}:", "collection".cyan());
            if config.collection.is_empty() {
                println!("  {}", "(empty)".dimmed());
            } else {
                for name in &config.collection {
                    println!("  - {}", name);
                }
            }
        }
    }

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "catalog" => Some(
            config
                .catalog_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        "collection" => Some(config.collection.join(",")),
        "generator.strict" => Some(config.generator.strict.to_string()),
        "generator.limit" => Some(config.generator.limit.to_string()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => eyre::bail!("Unknown config key: {}", key),
    }

    Ok(())
}
