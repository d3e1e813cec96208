//! Team generation command

use colored::*;
use eyre::Result;
use serde::Serialize;
use std::path::PathBuf;

use super::{Request, load_catalog};
use crate::catalog::character::Character;
use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::party::score::ScoreBreakdown;
use crate::party::{self, Team};

#[derive(Serialize)]
struct RankedTeam<'a> {
    rank: usize,
    score: i32,
    breakdown: ScoreBreakdown,
    members: &'a [&'a Character; party::TEAM_SIZE],
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    selection: String,
    total: usize,
    teams: Vec<RankedTeam<'a>>,
}

pub fn run(
    args: FilterArgs,
    limit: Option<usize>,
    explain: bool,
    format: OutputFormat,
    quiet: bool,
    catalog_path: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let catalog = load_catalog(catalog_path, config)?;
    let request = Request::prepare(&catalog, &args, config)?;
    let teams = party::generate(&request.pool, &request.filter);

    let limit = limit.unwrap_or(config.generator.limit);
    let shown = if limit == 0 { teams.len() } else { teams.len().min(limit) };

    let output = GenerateOutput {
        selection: request.filter.describe(),
        total: teams.len(),
        teams: teams[..shown].iter().enumerate().map(|(i, t)| ranked(i, t)).collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Text => print_text(&output, explain, quiet),
    }

    Ok(())
}

fn ranked<'a>(index: usize, team: &'a Team<'a>) -> RankedTeam<'a> {
    RankedTeam {
        rank: index + 1,
        score: team.score,
        breakdown: team.breakdown(),
        members: &team.members,
    }
}

fn print_text(output: &GenerateOutput<'_>, explain: bool, quiet: bool) {
    if output.total == 0 {
        eprintln!(
            "{} No teams found with the selected criteria. Try adjusting your selections.",
            "✗".red()
        );
        return;
    }

    for team in &output.teams {
        let members: Vec<String> = team
            .members
            .iter()
            .map(|c| format!("{} ({}, {})", c.agent.bold(), c.attribute, c.specialty))
            .collect();
        println!(
            "{} - Score: {} - {}",
            format!("Rank {}", team.rank).cyan(),
            team.score.to_string().green(),
            members.join(", ")
        );
        if explain {
            let b = &team.breakdown;
            println!(
                "    {}",
                format!(
                    "tier {} + faction {} + attribute {}",
                    b.base, b.faction_bonus, b.attribute_bonus
                )
                .dimmed()
            );
        }
    }

    let hidden = output.total - output.teams.len();
    if hidden > 0 {
        println!();
        println!("  {}", format!("({} more not shown, use --limit 0 to list all)", hidden).dimmed());
    }

    if !quiet {
        println!();
        println!(
            "{} Successfully generated {} team{} using the configuration for {}.",
            "✓".green(),
            output.total,
            if output.total > 1 { "s" } else { "" },
            output.selection
        );
    }
}
