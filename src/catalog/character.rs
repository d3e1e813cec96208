//! Character records and their fixed vocabularies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Combat attribute of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Fire,
    Electric,
    Ice,
    Physical,
    Ether,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Fire,
        Attribute::Electric,
        Attribute::Ice,
        Attribute::Physical,
        Attribute::Ether,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Fire => "Fire",
            Attribute::Electric => "Electric",
            Attribute::Ice => "Ice",
            Attribute::Physical => "Physical",
            Attribute::Ether => "Ether",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Attribute::ALL.iter().map(|a| a.as_str()).collect();
                eyre::eyre!("Unknown attribute '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Combat role of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Attack,
    Support,
    Stun,
    Defense,
    Anomaly,
}

impl Specialty {
    pub const ALL: [Specialty; 5] = [
        Specialty::Attack,
        Specialty::Support,
        Specialty::Stun,
        Specialty::Defense,
        Specialty::Anomaly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Attack => "Attack",
            Specialty::Support => "Support",
            Specialty::Stun => "Stun",
            Specialty::Defense => "Defense",
            Specialty::Anomaly => "Anomaly",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|sp| sp.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Specialty::ALL.iter().map(|sp| sp.as_str()).collect();
                eyre::eyre!("Unknown specialty '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// A single agent as it appears in the catalog file.
///
/// Field names follow the community `characters.json` layout so that file
/// can be loaded without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name, unique within a catalog
    #[serde(rename = "Agent")]
    pub agent: String,

    #[serde(rename = "Attribute")]
    pub attribute: Attribute,

    #[serde(rename = "Specialty")]
    pub specialty: Specialty,

    #[serde(rename = "Faction")]
    pub faction: String,

    /// Strength ranking, lower is better
    #[serde(rename = "Tier")]
    pub tier: i32,

    #[serde(rename = "fourPieceDriveDisk")]
    pub four_piece_drive_disk: String,

    #[serde(rename = "twoPieceDriveDisk")]
    pub two_piece_drive_disk: String,
}

impl Character {
    /// Case-insensitive substring match over name, attribute, specialty and faction
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.agent.to_lowercase().contains(&term)
            || self.attribute.as_str().to_lowercase().contains(&term)
            || self.specialty.as_str().to_lowercase().contains(&term)
            || self.faction.to_lowercase().contains(&term)
    }
}
