pub mod errors;
pub mod persistence;
pub mod types;

pub use errors::LobbyError;
pub use persistence::{load_lobby, save_lobby};
pub use types::{Lobby, Team, TeamMember, TeamSheet};

use crate::roster::Identity;

/// Parse a user-supplied name or mention into an identity.
pub fn parse_identity(raw: &str) -> Result<Identity, LobbyError> {
    Identity::parse(raw).ok_or(LobbyError::InvalidIdentity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identity() {
        assert_eq!(parse_identity("<@!42>").unwrap(), Identity::from("42"));
        assert!(matches!(
            parse_identity("  @ "),
            Err(LobbyError::InvalidIdentity)
        ));
    }
}
