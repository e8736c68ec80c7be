//! Grouping constraints and the token parser that builds them.
//!
//! Constraints arrive as a flat token list, e.g.
//! `["same:alice,bob", "carol", "diff:dave,erin"]`:
//!
//! - `same:<ids>` starts a new must-be-together group seeded with its inline
//!   ids; following plain tokens join that group until the next marker.
//! - `diff:<ids>` closes any open group and adds its inline ids to the
//!   must-be-split set.
//! - Plain tokens outside an open `same:` group are ignored.
//!
//! Parsing never fails. Malformed input shrinks the constraint set instead.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::Split;
use crate::roster::Identity;

pub const SAME_MARKER: &str = "same:";
pub const DIFF_MARKER: &str = "diff:";

/// Parsed grouping constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Each group must end up on a single team.
    pub same_groups: Vec<BTreeSet<Identity>>,
    /// At least one member must land on each team.
    pub split_set: BTreeSet<Identity>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.same_groups.iter().all(|g| g.len() < 2) && self.split_set.len() < 2
    }

    /// Drop everything that cannot affect a match between `active` players.
    ///
    /// Unknown ids are removed, groups left with fewer than two members are
    /// discarded, and a split set with fewer than two members is cleared.
    pub fn restricted_to(&self, active: &BTreeSet<Identity>) -> Self {
        let same_groups = self
            .same_groups
            .iter()
            .map(|g| g.intersection(active).cloned().collect::<BTreeSet<_>>())
            .filter(|g| g.len() >= 2)
            .collect();

        let mut split_set: BTreeSet<_> = self.split_set.intersection(active).cloned().collect();
        if split_set.len() < 2 {
            split_set.clear();
        }

        Self {
            same_groups,
            split_set,
        }
    }

    /// Whether `split` honours every constraint.
    pub fn admits(&self, split: &Split) -> bool {
        self.same_groups.iter().all(|g| split.keeps_together(g))
            && (self.split_set.is_empty() || split.divides(&self.split_set))
    }
}

enum Token<'a> {
    Same(&'a str),
    Diff(&'a str),
    Plain(&'a str),
}

fn strip_marker<'a>(token: &'a str, marker: &str) -> Option<&'a str> {
    let head = token.get(..marker.len())?;
    head.eq_ignore_ascii_case(marker)
        .then(|| &token[marker.len()..])
}

fn classify(token: &str) -> Token<'_> {
    if let Some(rest) = strip_marker(token, SAME_MARKER) {
        Token::Same(rest)
    } else if let Some(rest) = strip_marker(token, DIFF_MARKER) {
        Token::Diff(rest)
    } else {
        Token::Plain(token)
    }
}

fn inline_ids(list: &str) -> impl Iterator<Item = Identity> + '_ {
    list.split(',').filter_map(Identity::parse)
}

/// Parse constraint tokens into a [`ConstraintSet`].
pub fn parse_constraints<S: AsRef<str>>(tokens: &[S]) -> ConstraintSet {
    let mut constraints = ConstraintSet::default();
    let mut pending: Option<BTreeSet<Identity>> = None;

    for token in tokens {
        match classify(token.as_ref().trim()) {
            Token::Same(rest) => {
                if let Some(group) = pending.take() {
                    constraints.same_groups.push(group);
                }
                pending = Some(inline_ids(rest).collect());
            }
            Token::Diff(rest) => {
                if let Some(group) = pending.take() {
                    constraints.same_groups.push(group);
                }
                constraints.split_set.extend(inline_ids(rest));
            }
            Token::Plain(raw) => match pending.as_mut() {
                Some(group) => group.extend(inline_ids(raw)),
                None => {
                    tracing::debug!(event = "core.constraints.token_ignored", token = raw);
                }
            },
        }
    }

    if let Some(group) = pending {
        constraints.same_groups.push(group);
    }

    constraints
}
