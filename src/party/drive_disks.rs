//! Drive-disk shopping list
//!
//! Every member wants a four-piece and a two-piece set. Summed across a list
//! of teams this shows which disk sets are worth farming first.

use indexmap::IndexMap;

use super::Team;

pub const FOUR_PIECE: u32 = 4;
pub const TWO_PIECE: u32 = 2;

/// Pieces needed per disk set, most needed first; ties keep first-seen order
pub fn tally(teams: &[Team<'_>]) -> IndexMap<String, u32> {
    let mut counts: IndexMap<String, u32> = IndexMap::new();

    for member in teams.iter().flat_map(|t| t.members.iter()) {
        *counts.entry(member.four_piece_drive_disk.clone()).or_insert(0) += FOUR_PIECE;
        *counts.entry(member.two_piece_drive_disk.clone()).or_insert(0) += TWO_PIECE;
    }

    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}
