//! lineup-core: balanced 5v5 team selection with repeat avoidance
//!
//! This library holds the balancing engine and the lobby state around it.
//! It is used by the `lineup` CLI.
//!
//! # Main Entry Points
//!
//! - [`balance`] - The pure balancing engine (`balance::balance`)
//! - [`lobby`] - Per-scope roster, participant pool, tolerance and history
//! - [`state`] - Command dispatch over a persisted lobby
//! - [`roster`] - Identities and ratings

pub mod balance;
pub mod errors;
pub mod events;
pub mod lobby;
pub mod logging;
pub mod roster;
pub mod state;

pub use balance::{
    BalanceError, BalanceOutcome, BalanceRequest, ConstraintSet, History, HistoryEntry,
    RepeatPolicy, Split, parse_constraints,
};
pub use errors::{LineupError, LineupResult};
pub use lobby::{Lobby, LobbyError, TeamSheet};
pub use roster::{Identity, Roster};
pub use state::{Command, DispatchError, Event, LobbyStore, Store};

// Re-export config types from lineup-config
pub use lineup_config::{ConfigError, LineupConfig};

// Re-export logging initialization
pub use logging::init_logging;
