//! Team scoring heuristic
//!
//! score = Σ(3 − tier) + faction bonus + attribute bonus
//!
//! A grouping bonus is +2 when the three members span at most two distinct
//! values and a further +3 when they all share one value.

use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

use crate::catalog::character::Character;

/// Tier value that contributes nothing to the base score
pub const TIER_CEILING: i32 = 3;

/// At most two distinct values among the three members
pub const SHARED_BONUS: i32 = 2;

/// All three members share the value (stacks with SHARED_BONUS)
pub const UNIFORM_BONUS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub faction_bonus: i32,
    pub attribute_bonus: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.base
            .saturating_add(self.faction_bonus)
            .saturating_add(self.attribute_bonus)
    }
}

fn grouping_bonus<K: Eq + Hash>(keys: impl IntoIterator<Item = K>) -> i32 {
    let distinct = keys.into_iter().collect::<HashSet<_>>().len();
    let mut bonus = 0;
    if distinct < 3 {
        bonus += SHARED_BONUS;
    }
    if distinct == 1 {
        bonus += UNIFORM_BONUS;
    }
    bonus
}

/// Saturates instead of overflowing for tiers far outside the shipped range
pub fn breakdown(members: &[&Character; 3]) -> ScoreBreakdown {
    ScoreBreakdown {
        base: members
            .iter()
            .fold(0i32, |acc, c| acc.saturating_add(TIER_CEILING.saturating_sub(c.tier))),
        faction_bonus: grouping_bonus(members.iter().map(|c| c.faction.as_str())),
        attribute_bonus: grouping_bonus(members.iter().map(|c| c.attribute)),
    }
}

pub fn score_team(members: &[&Character; 3]) -> i32 {
    breakdown(members).total()
}
