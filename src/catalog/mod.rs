//! Agent catalog
//!
//! The catalog is the static character dataset the generator works from:
//! - loaded once (built-in YAML or a user-supplied JSON/YAML file)
//! - validated at load time (unique agent names, known vocabulary)
//! - never mutated afterwards

pub mod character;
pub mod collection;

use eyre::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use character::{Attribute, Character, Specialty};

const BUILTIN_CATALOG: &str = include_str!("../../data/characters.yaml");

/// Largest tier magnitude accepted; keeps team scores well inside `i32`
pub const MAX_TIER_MAGNITUDE: i32 = 1000;

/// Validated, read-only set of characters
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or blank agent names and absurd tiers.
    ///
    /// Names are compared with ASCII case folding, the same rule `get` uses.
    pub fn from_characters(characters: Vec<Character>) -> Result<Self> {
        let mut seen = HashSet::new();

        for (index, character) in characters.iter().enumerate() {
            if character.agent.trim().is_empty() {
                eyre::bail!("Catalog entry #{} has an empty Agent name", index + 1);
            }
            if !seen.insert(character.agent.to_ascii_lowercase()) {
                eyre::bail!(
                    "Duplicate agent '{}' in catalog (entry #{})",
                    character.agent,
                    index + 1
                );
            }
            if character.tier.unsigned_abs() > MAX_TIER_MAGNITUDE.unsigned_abs() {
                eyre::bail!(
                    "Agent '{}' has tier {} outside -{max}..={max} (entry #{})",
                    character.agent,
                    character.tier,
                    index + 1,
                    max = MAX_TIER_MAGNITUDE
                );
            }
            if !(1..=3).contains(&character.tier) {
                log::warn!(
                    "Agent '{}' has tier {} outside 1..=3; scores may go negative",
                    character.agent,
                    character.tier
                );
            }
        }

        Ok(Self { characters })
    }

    /// Load a catalog file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let characters: Vec<Character> = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?
        };

        let catalog = Self::from_characters(characters)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        log::info!("Loaded {} agents from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The dataset shipped with the binary
    pub fn builtin() -> Result<Self> {
        let characters: Vec<Character> =
            serde_yaml::from_str(BUILTIN_CATALOG).context("Failed to parse built-in catalog")?;
        let catalog = Self::from_characters(characters).context("Invalid built-in catalog")?;

        log::info!("Loaded {} agents from built-in catalog", catalog.len());
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise fall back to the built-in dataset
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => Self::load(p)?,
            None => Self::builtin()?,
        };
        if catalog.is_empty() {
            log::warn!("Catalog is empty, no teams can be generated");
        }
        Ok(catalog)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up an agent by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Character> {
        let name = name.trim();
        self.characters.iter().find(|c| c.agent.eq_ignore_ascii_case(name))
    }

    /// Agents whose name, attribute, specialty or faction contains `term`
    pub fn search(&self, term: &str) -> Vec<&Character> {
        let term = term.trim();
        if term.is_empty() {
            return self.characters.iter().collect();
        }
        self.characters.iter().filter(|c| c.matches(term)).collect()
    }

    /// Distinct attributes present, in catalog order
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut out = Vec::new();
        for c in &self.characters {
            if !out.contains(&c.attribute) {
                out.push(c.attribute);
            }
        }
        out
    }

    /// Distinct specialties present, in catalog order
    pub fn specialties(&self) -> Vec<Specialty> {
        let mut out = Vec::new();
        for c in &self.characters {
            if !out.contains(&c.specialty) {
                out.push(c.specialty);
            }
        }
        out
    }
}
