use crate::errors::LineupError;
use crate::roster::Identity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("Need exactly {required} participants to make teams, have {count}")]
    WrongParticipantCount { count: usize, required: usize },

    #[error("Participant '{identity}' has no skill rating. Register them with add-member first.")]
    MissingRating { identity: Identity },

    #[error("No team split satisfies the given constraints")]
    UnsatisfiableConstraints,
}

impl LineupError for BalanceError {
    fn error_code(&self) -> &'static str {
        match self {
            BalanceError::WrongParticipantCount { .. } => "WRONG_PARTICIPANT_COUNT",
            BalanceError::MissingRating { .. } => "MISSING_RATING",
            BalanceError::UnsatisfiableConstraints => "UNSATISFIABLE_CONSTRAINTS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_participant_count_display() {
        let error = BalanceError::WrongParticipantCount {
            count: 7,
            required: 10,
        };
        assert_eq!(
            error.to_string(),
            "Need exactly 10 participants to make teams, have 7"
        );
        assert_eq!(error.error_code(), "WRONG_PARTICIPANT_COUNT");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_missing_rating_names_identity() {
        let error = BalanceError::MissingRating {
            identity: Identity::from("ghost"),
        };
        assert!(error.to_string().contains("'ghost'"));
        assert_eq!(error.error_code(), "MISSING_RATING");
    }
}
