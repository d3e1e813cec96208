//! Team generation
//!
//! Pipeline: filter → enumerate every 3-combination → score → sort → dedup.
//!
//! The generator is a pure function over a borrowed pool. Enumeration is
//! exhaustive and therefore O(n³); fine for a catalog of a few dozen agents.

pub mod combinations;
pub mod drive_disks;
pub mod filter;
pub mod score;

use eyre::Result;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::catalog::character::Character;
use combinations::{triple_count, triples};
use filter::FilterSelection;
use score::ScoreBreakdown;

pub const TEAM_SIZE: usize = 3;

/// Three distinct agents and their score
#[derive(Debug, Clone)]
pub struct Team<'a> {
    pub members: [&'a Character; TEAM_SIZE],
    pub score: i32,
}

impl<'a> Team<'a> {
    /// Build a team from caller-chosen members, rejecting repeats
    pub fn new(members: [&'a Character; TEAM_SIZE]) -> Result<Self> {
        let team = Self::scored(members);
        let key = team.key();
        if key[0] == key[1] || key[1] == key[2] {
            eyre::bail!(
                "A team needs {} distinct agents, got: {}",
                TEAM_SIZE,
                team.names().join(", ")
            );
        }
        Ok(team)
    }

    /// Resolve three agent names against the catalog
    pub fn from_names<S: AsRef<str>>(catalog: &'a Catalog, names: &[S]) -> Result<Self> {
        if names.len() != TEAM_SIZE {
            eyre::bail!("A team needs exactly {} agents, got {}", TEAM_SIZE, names.len());
        }
        let lookup = |name: &str| {
            catalog
                .get(name)
                .ok_or_else(|| eyre::eyre!("Unknown agent '{}'", name.trim()))
        };
        Self::new([
            lookup(names[0].as_ref())?,
            lookup(names[1].as_ref())?,
            lookup(names[2].as_ref())?,
        ])
    }

    fn scored(members: [&'a Character; TEAM_SIZE]) -> Self {
        let score = score::score_team(&members);
        Self { members, score }
    }

    /// Member names sorted; equal keys mean equal member-sets
    pub fn key(&self) -> [&'a str; TEAM_SIZE] {
        let mut key = self.members.map(|c| c.agent.as_str());
        key.sort_unstable();
        key
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.members.iter().map(|c| c.agent.as_str()).collect()
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        score::breakdown(&self.members)
    }
}

/// Rank every valid team in `pool` under `filter`.
///
/// Returns an empty list when fewer than three agents pass the filter.
/// Equal scores keep enumeration order (stable sort over i < j < k), so the
/// output is reproducible for a given pool order.
pub fn generate<'a>(pool: &'a [Character], filter: &FilterSelection) -> Vec<Team<'a>> {
    let mut seen = HashSet::new();
    let mut eligible: Vec<&'a Character> = Vec::new();
    for character in pool.iter().filter(|c| filter.accepts(c)) {
        if seen.insert(character.agent.as_str()) {
            eligible.push(character);
        } else {
            log::warn!("Agent '{}' appears twice in the pool, keeping the first", character.agent);
        }
    }

    log::debug!(
        "{} of {} agents pass filter [{}]",
        eligible.len(),
        pool.len(),
        filter.describe()
    );

    if eligible.len() < TEAM_SIZE {
        return Vec::new();
    }

    log::debug!("Scoring {} candidate teams", triple_count(eligible.len()));

    let mut teams: Vec<Team<'a>> = triples(&eligible)
        .map(|[a, b, c]| Team::scored([*a, *b, *c]))
        .collect();

    teams.sort_by(|a, b| b.score.cmp(&a.score));
    dedup(teams)
}

/// Drop teams whose member-set already appeared earlier in the list
pub fn dedup<'a>(teams: Vec<Team<'a>>) -> Vec<Team<'a>> {
    let before = teams.len();
    let mut seen = HashSet::new();
    let unique: Vec<Team<'a>> = teams.into_iter().filter(|t| seen.insert(t.key())).collect();

    if unique.len() != before {
        log::debug!("Removed {} duplicate teams", before - unique.len());
    }
    unique
}
