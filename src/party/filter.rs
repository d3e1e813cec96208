//! Attribute / specialty selections that narrow the agent pool

use eyre::Result;
use std::fmt;
use std::str::FromStr;

use crate::catalog::character::{Attribute, Character, Specialty};

/// Most tokens a selection list may hold per field
pub const MAX_SELECTIONS: usize = 3;

/// Wildcard token accepted on input
pub const AUTOFILL: &str = "Autofill";

/// One slot of a selection list: a concrete value or the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    Autofill,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    fn accepts(&self, value: &T) -> bool {
        match self {
            Selector::Autofill => true,
            Selector::Only(v) => v == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Autofill => write!(f, "{}", AUTOFILL),
            Selector::Only(v) => write!(f, "{}", v),
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = eyre::Report>,
{
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(AUTOFILL) {
            Ok(Selector::Autofill)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

/// An empty list, or any wildcard in the list, accepts every value
fn list_accepts<T: PartialEq>(list: &[Selector<T>], value: &T) -> bool {
    list.is_empty() || list.iter().any(|s| s.accepts(value))
}

/// Caller-supplied constraints for one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    attributes: Vec<Selector<Attribute>>,
    specialties: Vec<Selector<Specialty>>,
}

impl FilterSelection {
    pub fn new(attributes: Vec<Selector<Attribute>>, specialties: Vec<Selector<Specialty>>) -> Result<Self> {
        if attributes.len() > MAX_SELECTIONS {
            eyre::bail!("You can only select up to {} attributes.", MAX_SELECTIONS);
        }
        if specialties.len() > MAX_SELECTIONS {
            eyre::bail!("You can only select up to {} specialties.", MAX_SELECTIONS);
        }
        Ok(Self {
            attributes,
            specialties,
        })
    }

    /// Parse raw tokens such as `["Fire", "autofill"]`
    pub fn parse<A, S>(attributes: &[A], specialties: &[S]) -> Result<Self>
    where
        A: AsRef<str>,
        S: AsRef<str>,
    {
        let attributes = attributes
            .iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        let specialties = specialties
            .iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Self::new(attributes, specialties)
    }

    /// Pad both lists with the wildcard up to the selection cap.
    ///
    /// Any padded list contains a wildcard and therefore accepts every value.
    pub fn autofilled(mut self) -> Self {
        while self.attributes.len() < MAX_SELECTIONS {
            self.attributes.push(Selector::Autofill);
        }
        while self.specialties.len() < MAX_SELECTIONS {
            self.specialties.push(Selector::Autofill);
        }
        self
    }

    pub fn attributes(&self) -> &[Selector<Attribute>] {
        &self.attributes
    }

    pub fn specialties(&self) -> &[Selector<Specialty>] {
        &self.specialties
    }

    pub fn accepts(&self, character: &Character) -> bool {
        list_accepts(&self.attributes, &character.attribute) && list_accepts(&self.specialties, &character.specialty)
    }

    /// "Attributes: Fire, Autofill, Specialties: Stun"
    pub fn describe(&self) -> String {
        format!(
            "Attributes: {}, Specialties: {}",
            join_or_any(&self.attributes),
            join_or_any(&self.specialties)
        )
    }
}

fn join_or_any<T: fmt::Display>(list: &[Selector<T>]) -> String {
    if list.is_empty() {
        return "(any)".to_string();
    }
    list.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
}
