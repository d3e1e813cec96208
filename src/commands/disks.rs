//! Drive-disk summary command

use colored::*;
use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use super::{Request, load_catalog};
use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::party::{self, Team, drive_disks};

#[derive(Serialize)]
struct DiskSummary<'a> {
    teams: Vec<Vec<&'a str>>,
    pieces: IndexMap<String, u32>,
}

pub fn run(
    team_args: Vec<String>,
    args: FilterArgs,
    top: usize,
    format: OutputFormat,
    catalog_path: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    if team_args.is_empty() && top == 0 {
        eyre::bail!("--top must be at least 1");
    }

    let catalog = load_catalog(catalog_path, config)?;

    // Held here so generated teams can borrow from it
    let request;
    let teams: Vec<Team<'_>> = if team_args.is_empty() {
        request = Request::prepare(&catalog, &args, config)?;
        party::generate(&request.pool, &request.filter)
            .into_iter()
            .take(top)
            .collect()
    } else {
        team_args
            .iter()
            .map(|raw| {
                let names: Vec<&str> = raw.split(',').map(str::trim).collect();
                Team::from_names(&catalog, &names).with_context(|| format!("Invalid --team '{}'", raw))
            })
            .collect::<Result<_>>()?
    };

    let summary = DiskSummary {
        teams: teams.iter().map(|t| t.names()).collect(),
        pieces: drive_disks::tally(&teams),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summary)?),
        OutputFormat::Text => {
            if summary.teams.is_empty() {
                eprintln!(
                    "{} No teams found with the selected criteria. Try adjusting your selections.",
                    "✗".red()
                );
                return Ok(());
            }

            println!("{}", "Teams:".bold());
            for names in &summary.teams {
                println!("  {} {}", "•".cyan(), names.join(", "));
            }
            println!();
            println!("{}", "Drive Disks:".bold());
            let width = summary.pieces.keys().map(|k| k.len()).max().unwrap_or(0);
            for (disk, count) in &summary.pieces {
                println!("  {:<width$}  {} pieces", disk, count.to_string().green(), width = width);
            }
        }
    }

    Ok(())
}
