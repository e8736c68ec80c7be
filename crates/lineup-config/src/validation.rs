//! Configuration validation logic.

use crate::errors::ConfigError;
use crate::types::LineupConfig;

/// Longest scope name accepted for a lobby data file.
pub const MAX_SCOPE_LEN: usize = 64;

/// Whether `name` can be used as a scope (and therefore as a file stem).
///
/// Allows alphanumerics, hyphens, underscores and dots, but no path traversal.
pub fn is_valid_scope_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_SCOPE_LEN
        && !name.contains("..")
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Validate a LineupConfig, returning an error if any values are invalid.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` if the default scope is not a
/// usable scope name.
pub fn validate_config(config: &LineupConfig) -> Result<(), ConfigError> {
    let scope = config.storage.default_scope();
    if !is_valid_scope_name(scope) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Invalid default_scope '{}'. Use letters, digits, '-', '_' or '.' (max {} chars)",
                scope, MAX_SCOPE_LEN
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LineupConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_default_scope() {
        let mut config = LineupConfig::default();
        config.storage.default_scope = Some("../etc".to_string());

        let result = validate_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_empty_default_scope_rejected() {
        let mut config = LineupConfig::default();
        config.storage.default_scope = Some(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_scope_names() {
        assert!(is_valid_scope_name("default"));
        assert!(is_valid_scope_name("guild_123-voice.2"));
        assert!(!is_valid_scope_name(".hidden"));
        assert!(!is_valid_scope_name("a/b"));
        assert!(!is_valid_scope_name("with space"));
        assert!(!is_valid_scope_name(&"x".repeat(MAX_SCOPE_LEN + 1)));
    }
}
