use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::LobbyError;
use crate::balance::{self, BalanceOutcome, BalanceRequest, History, RepeatPolicy};
use crate::roster::{Identity, Roster};

/// State for one scope: who is registered, who has joined the next match,
/// the skill tolerance, and recent matches.
///
/// Every mutating operation takes `&mut self`, so a lobby is never balanced
/// and edited at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lobby {
    pub(super) roster: Roster,
    pub(super) participants: BTreeSet<Identity>,
    pub(super) tolerance: u64,
    pub(super) history: History,
}

impl Lobby {
    pub fn new(tolerance: u64) -> Self {
        Self {
            roster: Roster::new(),
            participants: BTreeSet::new(),
            tolerance,
            history: History::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn participants(&self) -> &BTreeSet<Identity> {
        &self.participants
    }

    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Register a member or update their rating. Returns the previous rating.
    pub fn add_member(&mut self, identity: Identity, rating: i64) -> Option<i64> {
        self.roster.insert(identity, rating)
    }

    /// Unregister a member, also taking them out of the participant pool.
    pub fn remove_member(&mut self, identity: &Identity) -> Result<i64, LobbyError> {
        let rating = self
            .roster
            .remove(identity)
            .ok_or_else(|| LobbyError::NotRegistered {
                identity: identity.clone(),
            })?;
        self.participants.remove(identity);
        Ok(rating)
    }

    /// Registered members, highest rating first.
    pub fn members_by_rating(&self) -> Vec<(Identity, i64)> {
        self.roster.by_rating()
    }

    /// Add a registered member to the pool. Returns `false` if already in it.
    pub fn join(&mut self, identity: Identity) -> Result<bool, LobbyError> {
        if !self.roster.contains(&identity) {
            return Err(LobbyError::NotRegistered { identity });
        }
        Ok(self.participants.insert(identity))
    }

    pub fn leave(&mut self, identity: &Identity) -> Result<(), LobbyError> {
        if !self.participants.remove(identity) {
            return Err(LobbyError::NotParticipating {
                identity: identity.clone(),
            });
        }
        Ok(())
    }

    pub fn reset_participants(&mut self) {
        self.participants.clear();
    }

    /// Set the maximum acceptable skill difference between teams.
    pub fn set_tolerance(&mut self, value: i64) -> Result<(), LobbyError> {
        self.tolerance =
            u64::try_from(value).map_err(|_| LobbyError::InvalidTolerance { value })?;
        Ok(())
    }

    /// Balance the current pool into two teams and record the match.
    ///
    /// History is only replaced when balancing succeeds. The pool is kept so
    /// the same group can ask for another match.
    pub fn make_teams<S, R>(
        &mut self,
        constraint_tokens: &[S],
        policy: RepeatPolicy,
        recorded_at: Option<DateTime<Utc>>,
        rng: &mut R,
    ) -> Result<TeamSheet, LobbyError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut request = BalanceRequest::new(
            self.participants.clone(),
            self.roster.ratings().clone(),
            self.tolerance,
        )
        .with_constraint_tokens(constraint_tokens)
        .with_policy(policy);
        if let Some(at) = recorded_at {
            request = request.recorded_at(at);
        }

        let outcome = balance::balance(&request, &self.history, rng)?;
        let sheet = TeamSheet::from_outcome(&outcome, &self.roster, self.tolerance);
        self.history = outcome.history;
        Ok(sheet)
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(lineup_config::DEFAULT_TOLERANCE)
    }
}

/// One player on a team sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub identity: Identity,
    pub rating: i64,
}

/// A team ordered by rating (highest first) with its rating total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<TeamMember>,
    pub total: i64,
}

impl Team {
    fn from_side(side: &BTreeSet<Identity>, roster: &Roster) -> Self {
        let mut members: Vec<TeamMember> = side
            .iter()
            .map(|id| TeamMember {
                identity: id.clone(),
                rating: roster.rating(id).unwrap_or_default(),
            })
            .collect();
        members.sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| a.identity.cmp(&b.identity))
        });
        let total = members
            .iter()
            .fold(0i64, |acc, m| acc.saturating_add(m.rating));
        Self { members, total }
    }
}

/// Presentation-ready result of [`Lobby::make_teams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub team_one: Team,
    pub team_two: Team,
    pub skill_diff: u64,
    pub repeat_score: u64,
    pub tolerance: u64,
    pub tolerance_met: bool,
    pub candidates_considered: usize,
}

impl TeamSheet {
    fn from_outcome(outcome: &BalanceOutcome, roster: &Roster, tolerance: u64) -> Self {
        Self {
            team_one: Team::from_side(&outcome.split.team_a, roster),
            team_two: Team::from_side(&outcome.split.team_b, roster),
            skill_diff: outcome.skill_diff,
            repeat_score: outcome.repeat_score,
            tolerance,
            tolerance_met: outcome.tolerance_met,
            candidates_considered: outcome.candidates_considered,
        }
    }
}
