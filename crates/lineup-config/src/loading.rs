//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.lineup/config.toml` (global user preferences)
//! 3. **Project config** - `./.lineup/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::errors::ConfigError;
use crate::types::{BalanceConfig, LineupConfig, StorageConfig};
use crate::validation::validate_config;
use lineup_paths::LineupPaths;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<LineupConfig, ConfigError> {
    let paths = LineupPaths::resolve().map_err(|e| ConfigError::InvalidConfiguration {
        message: e.to_string(),
    })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load the hierarchy from explicit locations. Used by `load_hierarchy` and tests.
pub fn load_hierarchy_from(
    paths: &LineupPaths,
    project_root: &Path,
) -> Result<LineupConfig, ConfigError> {
    let mut config = LineupConfig::default();

    if let Some(user_config) = load_config_file(&paths.user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(&LineupPaths::project_config(project_root))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    tracing::debug!(
        event = "config.load_completed",
        default_tolerance = config.balance.default_tolerance(),
        default_scope = config.storage.default_scope()
    );

    Ok(config)
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
fn load_config_file(path: &Path) -> Result<Option<LineupConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                source: std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)),
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: LineupConfig, override_config: LineupConfig) -> LineupConfig {
    LineupConfig {
        balance: BalanceConfig::merge(&base.balance, &override_config.balance),
        storage: StorageConfig::merge(&base.storage, &override_config.storage),
    }
}
