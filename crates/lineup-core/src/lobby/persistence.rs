//! Lobby file persistence
//!
//! One pretty-printed JSON file per scope, written atomically via a temp file
//! and rename. Files written by the older bot format (`power_diff_tolerance`
//! and `[[team1], [team2]]` history pairs) are read transparently.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::LobbyError;
use super::types::Lobby;
use crate::balance::{History, HistoryEntry, Split};
use crate::roster::{Identity, Roster};

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMatch {
    Entry(HistoryEntry),
    Pair(BTreeSet<Identity>, BTreeSet<Identity>),
}

impl From<StoredMatch> for HistoryEntry {
    fn from(stored: StoredMatch) -> Self {
        match stored {
            StoredMatch::Entry(entry) => entry,
            StoredMatch::Pair(team_a, team_b) => HistoryEntry {
                split: Split::new(team_a, team_b),
                recorded_at: None,
            },
        }
    }
}

#[derive(Deserialize)]
struct LobbyFile {
    #[serde(default)]
    members: BTreeMap<Identity, i64>,
    #[serde(default)]
    participants: BTreeSet<Identity>,
    #[serde(default, alias = "power_diff_tolerance")]
    tolerance: Option<u64>,
    #[serde(default)]
    history: Vec<StoredMatch>,
}

#[derive(Serialize)]
struct LobbyFileRef<'a> {
    members: &'a Roster,
    participants: &'a BTreeSet<Identity>,
    tolerance: u64,
    history: &'a History,
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.lobby.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after operation error"
        );
    }
}

/// Load the lobby stored at `path`.
///
/// A missing file yields an empty lobby using `default_tolerance`. History
/// longer than the cap keeps only the newest entries, and participants who
/// are no longer registered are dropped.
pub fn load_lobby(path: &Path, default_tolerance: u64) -> Result<Lobby, LobbyError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "core.lobby.load_missing",
                path = %path.display(),
                "No lobby file yet, starting empty"
            );
            return Ok(Lobby::new(default_tolerance));
        }
        Err(e) => return Err(LobbyError::IoError { source: e }),
    };

    let file: LobbyFile =
        serde_json::from_str(&content).map_err(|e| LobbyError::InvalidLobbyFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let roster: Roster = file.members.into_iter().collect();
    let (participants, unknown): (BTreeSet<_>, BTreeSet<_>) = file
        .participants
        .into_iter()
        .partition(|id| roster.contains(id));
    if !unknown.is_empty() {
        tracing::warn!(
            event = "core.lobby.load_unregistered_participants",
            path = %path.display(),
            dropped = unknown.len(),
            message = "Lobby file lists participants who are not registered, dropping them"
        );
    }

    let history = History::from(
        file.history
            .into_iter()
            .map(HistoryEntry::from)
            .collect::<Vec<_>>(),
    );

    let lobby = Lobby {
        roster,
        participants,
        tolerance: file.tolerance.unwrap_or(default_tolerance),
        history,
    };

    tracing::debug!(
        event = "core.lobby.load_completed",
        path = %path.display(),
        members = lobby.roster.len(),
        participants = lobby.participants.len(),
        history = lobby.history.len()
    );

    Ok(lobby)
}

/// Write `lobby` to `path`, creating parent directories as needed.
pub fn save_lobby(lobby: &Lobby, path: &Path) -> Result<(), LobbyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let snapshot = LobbyFileRef {
        members: &lobby.roster,
        participants: &lobby.participants,
        tolerance: lobby.tolerance,
        history: &lobby.history,
    };
    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
        tracing::error!(
            event = "core.lobby.serialization_failed",
            path = %path.display(),
            error = %e,
            message = "Failed to serialize lobby to JSON"
        );
        LobbyError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(LobbyError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(LobbyError::IoError { source: e });
    }

    tracing::debug!(event = "core.lobby.save_completed", path = %path.display());
    Ok(())
}
