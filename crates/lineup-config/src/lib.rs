//! # lineup-config
//!
//! TOML configuration types, loading, and validation for lineup.
//!
//! Single source of truth for `LineupConfig`. Depends only on `lineup-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{
    BalanceConfig, DEFAULT_SCOPE, DEFAULT_TOLERANCE, LineupConfig, RepeatPolicySetting,
    StorageConfig,
};
pub use validation::{MAX_SCOPE_LEN, is_valid_scope_name, validate_config};

impl LineupConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
