//! Candidate enumeration.
//!
//! Every unordered 5/5 split of the active players is produced exactly once.
//! The side holding the first player (in identity order) is always `team_a`,
//! which yields C(10,5) / 2 = 126 candidates.

use std::collections::BTreeSet;

use super::constraints::ConstraintSet;
use super::types::{MATCH_SIZE, Split, TEAM_SIZE};
use crate::roster::Identity;

/// Number of candidates produced for a full match.
pub const CANDIDATE_COUNT: usize = 126;

/// Enumerate all splits of `active` into two teams of [`TEAM_SIZE`].
///
/// Returns an empty list unless `active` holds exactly [`MATCH_SIZE`] players.
pub fn generate(active: &BTreeSet<Identity>) -> Vec<Split> {
    if active.len() != MATCH_SIZE {
        return Vec::new();
    }

    let players: Vec<&Identity> = active.iter().collect();
    let full: u16 = (1 << MATCH_SIZE) - 1;

    (0..=full)
        // Bit 0 pins the first player to team_a so mirrors are skipped
        .filter(|&mask| mask & 1 == 1 && mask.count_ones() as usize == TEAM_SIZE)
        .map(|mask| {
            let (team_a, team_b): (Vec<_>, Vec<_>) = players
                .iter()
                .enumerate()
                .partition(|&(i, _)| mask & (1u16 << i) != 0);
            Split::new(
                team_a.into_iter().map(|(_, id)| (*id).clone()).collect(),
                team_b.into_iter().map(|(_, id)| (*id).clone()).collect(),
            )
        })
        .collect()
}

/// Enumerate splits and keep those admitted by `constraints`.
pub fn feasible(active: &BTreeSet<Identity>, constraints: &ConstraintSet) -> Vec<Split> {
    let constraints = constraints.restricted_to(active);
    let candidates = generate(active);
    let total = candidates.len();

    let admitted: Vec<Split> = candidates
        .into_iter()
        .filter(|split| constraints.admits(split))
        .collect();

    tracing::debug!(
        event = "core.balance.candidates_filtered",
        generated = total,
        admitted = admitted.len(),
        same_groups = constraints.same_groups.len(),
        split_set = constraints.split_set.len()
    );

    admitted
}
