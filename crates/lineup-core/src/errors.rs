use std::error::Error;

/// Base trait for all lineup errors
pub trait LineupError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the system
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type LineupResult<T> = Result<T, Box<dyn LineupError>>;

impl LineupError for lineup_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            lineup_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            lineup_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            lineup_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            lineup_config::ConfigError::ConfigParseError { .. }
                | lineup_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl LineupError for lineup_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            lineup_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}
