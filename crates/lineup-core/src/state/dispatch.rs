use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use lineup_config::LineupConfig;

use crate::balance::RepeatPolicy;
use crate::lobby::{self, Lobby};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Store backed by one scope's lobby file.
///
/// The lobby is loaded once on open. Each command runs against a working
/// copy which replaces the held lobby only after it has been saved, so a
/// failed command or failed write leaves both memory and disk untouched.
pub struct LobbyStore<R = StdRng> {
    path: PathBuf,
    lobby: Lobby,
    policy: RepeatPolicy,
    rng: R,
}

impl LobbyStore<StdRng> {
    /// Open the lobby at `path` with an entropy-seeded RNG.
    pub fn open(path: &Path, config: &LineupConfig) -> Result<Self, DispatchError> {
        Self::open_with_rng(path, config, StdRng::from_entropy())
    }
}

impl<R: Rng> LobbyStore<R> {
    /// Open the lobby at `path` with a caller-supplied RNG. Use in tests.
    pub fn open_with_rng(
        path: &Path,
        config: &LineupConfig,
        rng: R,
    ) -> Result<Self, DispatchError> {
        let lobby = lobby::load_lobby(path, config.balance.default_tolerance())?;
        Ok(Self {
            path: path.to_path_buf(),
            lobby,
            policy: config.balance.repeat_policy().into(),
            rng,
        })
    }

    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn apply(&mut self, lobby: &mut Lobby, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        let events = match cmd {
            Command::AddMember { identity, rating } => {
                let previous = lobby.add_member(identity.clone(), rating);
                vec![Event::MemberRegistered {
                    identity,
                    rating,
                    previous,
                }]
            }
            Command::RemoveMember { identity } => {
                let rating = lobby.remove_member(&identity)?;
                vec![Event::MemberRemoved { identity, rating }]
            }
            Command::Join { identity } => {
                if lobby.join(identity.clone())? {
                    vec![Event::ParticipantJoined { identity }]
                } else {
                    vec![]
                }
            }
            Command::Leave { identity } => {
                lobby.leave(&identity)?;
                vec![Event::ParticipantLeft { identity }]
            }
            Command::ResetParticipants => {
                let cleared = lobby.participants().len();
                lobby.reset_participants();
                vec![Event::ParticipantsReset { cleared }]
            }
            Command::SetTolerance { value } => {
                let previous = lobby.tolerance();
                lobby.set_tolerance(value)?;
                vec![Event::ToleranceChanged {
                    previous,
                    tolerance: lobby.tolerance(),
                }]
            }
            Command::MakeTeams {
                constraints,
                recorded_at,
            } => {
                let sheet =
                    lobby.make_teams(&constraints, self.policy, recorded_at, &mut self.rng)?;
                vec![Event::TeamsMade { sheet }]
            }
        };
        Ok(events)
    }
}

impl<R: Rng> Store for LobbyStore<R> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let mut working = self.lobby.clone();
        let result = self.apply(&mut working, cmd).and_then(|events| {
            if !events.is_empty() {
                lobby::save_lobby(&working, &self.path)?;
            }
            Ok(events)
        });

        match &result {
            Ok(events) => {
                self.lobby = working;
                info!(
                    event = "core.state.dispatch_completed",
                    event_count = events.len()
                );
            }
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
