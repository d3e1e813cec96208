//! Agent catalog browsing

use colored::*;
use eyre::Result;
use std::path::PathBuf;

use super::load_catalog;
use crate::cli::{AgentsAction, OutputFormat};
use crate::config::Config;

pub fn run(action: AgentsAction, catalog_path: Option<&PathBuf>, config: &Config) -> Result<()> {
    match action {
        AgentsAction::List { search, format } => {
            list_agents(search.as_deref(), OutputFormat::resolve(format), catalog_path, config)
        }
        AgentsAction::Show { name, format } => show_agent(&name, OutputFormat::resolve(format), catalog_path, config),
    }
}

fn list_agents(search: Option<&str>, format: OutputFormat, catalog_path: Option<&PathBuf>, config: &Config) -> Result<()> {
    let catalog = load_catalog(catalog_path, config)?;
    let agents = catalog.search(search.unwrap_or(""));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&agents)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&agents)?),
        OutputFormat::Text => {
            println!("{}", "Agents:".bold());
            println!();

            if agents.is_empty() {
                println!("  {}", "(no matches)".dimmed());
                return Ok(());
            }

            let owned = |name: &str| config.collection.iter().any(|n| n.eq_ignore_ascii_case(name));

            for agent in &agents {
                let marker = if owned(&agent.agent) { "●".green() } else { "○".dimmed() };
                println!(
                    "  {} {} {}",
                    marker,
                    agent.agent.bold(),
                    format!("tier {}", agent.tier).dimmed()
                );
                println!(
                    "    {} / {} - {}",
                    agent.attribute.to_string().cyan(),
                    agent.specialty.to_string().magenta(),
                    agent.faction
                );
            }

            let attributes: Vec<String> = catalog.attributes().iter().map(|a| a.to_string()).collect();
            let specialties: Vec<String> = catalog.specialties().iter().map(|s| s.to_string()).collect();

            println!();
            println!("  {} of {} agents", agents.len(), catalog.len());
            println!("  Attributes: {}", attributes.join(", ").dimmed());
            println!("  Specialties: {}", specialties.join(", ").dimmed());
        }
    }

    Ok(())
}

fn show_agent(name: &str, format: OutputFormat, catalog_path: Option<&PathBuf>, config: &Config) -> Result<()> {
    let catalog = load_catalog(catalog_path, config)?;
    let agent = catalog
        .get(name)
        .ok_or_else(|| eyre::eyre!("Agent '{}' not found in catalog", name))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(agent)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(agent)?),
        OutputFormat::Text => {
            println!("{} {}", "Agent:".bold(), agent.agent.green().bold());
            println!();
            println!("  {} {}", "Attribute:".bold(), agent.attribute);
            println!("  {} {}", "Specialty:".bold(), agent.specialty);
            println!("  {} {}", "Faction:".bold(), agent.faction);
            println!("  {} {}", "Tier:".bold(), agent.tier);
            println!();
            println!("{}", "Drive Disks:".bold());
            println!("  {} 4pc {}", "•".cyan(), agent.four_piece_drive_disk);
            println!("  {} 2pc {}", "•".cyan(), agent.two_piece_drive_disk);
        }
    }

    Ok(())
}
