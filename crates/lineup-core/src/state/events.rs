use serde::{Deserialize, Serialize};

use crate::lobby::TeamSheet;
use crate::roster::Identity;

/// Lobby state changes produced by a dispatched command.
///
/// Each variant describes _what happened_. A command that changes nothing
/// (joining twice) succeeds with no events; failures use the error channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A member was registered or re-rated.
    MemberRegistered {
        identity: Identity,
        rating: i64,
        previous: Option<i64>,
    },
    /// A member was unregistered.
    MemberRemoved { identity: Identity, rating: i64 },
    ParticipantJoined { identity: Identity },
    ParticipantLeft { identity: Identity },
    /// The participant pool was emptied.
    ParticipantsReset { cleared: usize },
    ToleranceChanged { previous: u64, tolerance: u64 },
    /// Teams were made and the match recorded in history.
    TeamsMade { sheet: TeamSheet },
}
