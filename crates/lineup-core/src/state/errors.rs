use crate::errors::LineupError;
use crate::lobby::LobbyError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Lobby(#[from] LobbyError),
}

impl LineupError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Lobby(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Lobby(e) => e.is_user_error(),
        }
    }
}
