use std::path::PathBuf;

use crate::balance::BalanceError;
use crate::errors::LineupError;
use crate::roster::Identity;

#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    #[error("'{identity}' is not registered. Register them with: lineup add-member {identity} <RATING>")]
    NotRegistered { identity: Identity },

    #[error("'{identity}' has not joined the current match")]
    NotParticipating { identity: Identity },

    #[error("Invalid tolerance {value}: must be 0 or greater")]
    InvalidTolerance { value: i64 },

    #[error("Invalid identity: cannot be empty")]
    InvalidIdentity,

    #[error("Lobby file '{path}' is malformed: {message}")]
    InvalidLobbyFile { path: PathBuf, message: String },

    #[error(transparent)]
    Balance {
        #[from]
        source: BalanceError,
    },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl LineupError for LobbyError {
    fn error_code(&self) -> &'static str {
        match self {
            LobbyError::NotRegistered { .. } => "MEMBER_NOT_REGISTERED",
            LobbyError::NotParticipating { .. } => "MEMBER_NOT_PARTICIPATING",
            LobbyError::InvalidTolerance { .. } => "INVALID_TOLERANCE",
            LobbyError::InvalidIdentity => "INVALID_IDENTITY",
            LobbyError::InvalidLobbyFile { .. } => "INVALID_LOBBY_FILE",
            LobbyError::Balance { source } => source.error_code(),
            LobbyError::IoError { .. } => "LOBBY_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        if let LobbyError::Balance { source } = self {
            return source.is_user_error();
        }
        matches!(
            self,
            LobbyError::NotRegistered { .. }
                | LobbyError::NotParticipating { .. }
                | LobbyError::InvalidTolerance { .. }
                | LobbyError::InvalidIdentity
        )
    }
}
