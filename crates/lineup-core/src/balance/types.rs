//! Domain types for team balancing.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constraints::{ConstraintSet, parse_constraints};
use super::history::History;
use crate::roster::Identity;

/// Players per team.
pub const TEAM_SIZE: usize = 5;

/// Players per match (two teams).
pub const MATCH_SIZE: usize = TEAM_SIZE * 2;

/// Two teams that together make up one match.
///
/// Labels matter only for presentation: `team_a` is shown as team 1. Scoring
/// and constraint checks treat a split and its [`swapped`](Split::swapped)
/// form as the same match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub team_a: BTreeSet<Identity>,
    pub team_b: BTreeSet<Identity>,
}

impl Split {
    pub fn new(team_a: BTreeSet<Identity>, team_b: BTreeSet<Identity>) -> Self {
        Self { team_a, team_b }
    }

    /// The same split with team labels exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            team_a: self.team_b.clone(),
            team_b: self.team_a.clone(),
        }
    }

    /// Players kept on the same-labelled side: `|A ∩ A'| + |B ∩ B'|`.
    pub fn overlap(&self, other: &Split) -> usize {
        self.team_a.intersection(&other.team_a).count()
            + self.team_b.intersection(&other.team_b).count()
    }

    /// Overlap against `other` with this split's labels exchanged.
    pub fn swapped_overlap(&self, other: &Split) -> usize {
        self.team_a.intersection(&other.team_b).count()
            + self.team_b.intersection(&other.team_a).count()
    }

    /// Whether both splits put the same players together, in either labelling.
    pub fn same_teams(&self, other: &Split) -> bool {
        (self.team_a == other.team_a && self.team_b == other.team_b)
            || (self.team_a == other.team_b && self.team_b == other.team_a)
    }

    /// Whether every member of `group` sits on a single side.
    pub fn keeps_together(&self, group: &BTreeSet<Identity>) -> bool {
        group.is_subset(&self.team_a) || group.is_subset(&self.team_b)
    }

    /// Whether `group` has at least one member on each side.
    pub fn divides(&self, group: &BTreeSet<Identity>) -> bool {
        group.iter().any(|id| self.team_a.contains(id))
            && group.iter().any(|id| self.team_b.contains(id))
    }

    pub fn members(&self) -> impl Iterator<Item = &Identity> {
        self.team_a.iter().chain(self.team_b.iter())
    }
}

/// How past matches count against a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPolicy {
    /// Every past match contributes its best-aligned teammate overlap.
    #[default]
    Overlap,
    /// A past match contributes only when the candidate reproduces it exactly.
    Exact,
}

impl From<lineup_config::RepeatPolicySetting> for RepeatPolicy {
    fn from(setting: lineup_config::RepeatPolicySetting) -> Self {
        match setting {
            lineup_config::RepeatPolicySetting::Overlap => Self::Overlap,
            lineup_config::RepeatPolicySetting::Exact => Self::Exact,
        }
    }
}

/// A constraint-satisfying candidate with its scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub split: Split,
    pub skill_diff: u64,
    pub repeat_score: u64,
}

/// Everything the engine needs for one balancing run.
#[derive(Debug, Clone)]
pub struct BalanceRequest {
    pub active: BTreeSet<Identity>,
    pub ratings: BTreeMap<Identity, i64>,
    pub constraints: ConstraintSet,
    pub tolerance: u64,
    pub policy: RepeatPolicy,
    /// Timestamp stored on the new history entry. Supplied by the caller so
    /// the engine never reads the clock.
    pub recorded_at: Option<DateTime<Utc>>,
}

impl BalanceRequest {
    pub fn new(
        active: BTreeSet<Identity>,
        ratings: BTreeMap<Identity, i64>,
        tolerance: u64,
    ) -> Self {
        Self {
            active,
            ratings,
            constraints: ConstraintSet::default(),
            tolerance,
            policy: RepeatPolicy::default(),
            recorded_at: None,
        }
    }

    pub fn with_constraint_tokens<S: AsRef<str>>(mut self, tokens: &[S]) -> Self {
        self.constraints = parse_constraints(tokens);
        self
    }

    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_policy(mut self, policy: RepeatPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn recorded_at(mut self, at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(at);
        self
    }
}

/// Result of a successful balancing run.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// Selected split, labelled to match the previous match where possible.
    pub split: Split,
    pub skill_diff: u64,
    pub repeat_score: u64,
    /// `false` when no candidate fit the tolerance and the whole pool was used.
    pub tolerance_met: bool,
    /// Candidates that survived constraint filtering.
    pub candidates_considered: usize,
    /// Prior history with the selected split appended.
    pub history: History,
}
