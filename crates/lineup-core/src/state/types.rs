use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roster::Identity;

/// All lobby operations that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, stored, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Register a member or update their rating.
    AddMember { identity: Identity, rating: i64 },
    /// Unregister a member (also removes them from the pool).
    RemoveMember { identity: Identity },
    /// Add a registered member to the participant pool.
    Join { identity: Identity },
    /// Take a member out of the participant pool.
    Leave { identity: Identity },
    /// Empty the participant pool.
    ResetParticipants,
    /// Change the skill tolerance. Negative values are rejected.
    SetTolerance { value: i64 },
    /// Balance the pool into two teams.
    MakeTeams {
        /// Raw `same:` / `diff:` constraint tokens.
        constraints: Vec<String>,
        /// Timestamp stored with the match in history.
        recorded_at: Option<DateTime<Utc>>,
    },
}
