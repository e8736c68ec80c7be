//! Configuration type definitions for lineup.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [balance]
//! default_tolerance = 10
//! repeat_policy = "overlap"
//!
//! [storage]
//! default_scope = "friday-league"
//! ```

use serde::{Deserialize, Serialize};

/// Tolerance applied to scopes that have never had one set explicitly.
pub const DEFAULT_TOLERANCE: u64 = 10;

/// Scope used when neither `--scope` nor `[storage] default_scope` is given.
pub const DEFAULT_SCOPE: &str = "default";

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.lineup/config.toml`
/// 2. Project config: `./.lineup/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineupConfig {
    /// Team balancing defaults
    #[serde(default)]
    pub balance: BalanceConfig,

    /// Where lobby data is kept
    #[serde(default)]
    pub storage: StorageConfig,
}

/// How past matches count against a candidate split.
///
/// Mirrors the engine's repeat policy so config does not depend on the core crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPolicySetting {
    /// Every shared teammate with a recent match adds to the penalty.
    #[default]
    Overlap,
    /// Only an exact repeat of a recent match is penalized.
    Exact,
}

/// Balancing configuration.
///
/// Fields are `Option<T>` to support proper config hierarchy merging:
/// only explicitly-set values override lower-priority configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Skill-sum tolerance for scopes without a saved tolerance.
    /// Default: 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tolerance: Option<u64>,

    /// Repeat-avoidance scoring policy.
    /// Default: "overlap"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_policy: Option<RepeatPolicySetting>,
}

impl BalanceConfig {
    pub fn default_tolerance(&self) -> u64 {
        self.default_tolerance.unwrap_or(DEFAULT_TOLERANCE)
    }

    pub fn repeat_policy(&self) -> RepeatPolicySetting {
        self.repeat_policy.unwrap_or_default()
    }

    /// Merge two configs, with `override_config` taking precedence.
    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            default_tolerance: override_config
                .default_tolerance
                .or(base.default_tolerance),
            repeat_policy: override_config.repeat_policy.or(base.repeat_policy),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Scope name used when the CLI is not given `--scope`.
    /// Default: "default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scope: Option<String>,
}

impl StorageConfig {
    pub fn default_scope(&self) -> &str {
        self.default_scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            default_scope: override_config
                .default_scope
                .clone()
                .or_else(|| base.default_scope.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_config_serialization() {
        let config = LineupConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LineupConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.balance.default_tolerance(),
            config.balance.default_tolerance()
        );
    }

    #[test]
    fn test_defaults_when_missing() {
        let config: LineupConfig = toml::from_str("").unwrap();
        assert_eq!(config.balance.default_tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(config.balance.repeat_policy(), RepeatPolicySetting::Overlap);
        assert_eq!(config.storage.default_scope(), "default");
    }

    #[test]
    fn test_balance_config_from_toml() {
        let config: LineupConfig = toml::from_str(
            r#"
[balance]
default_tolerance = 25
repeat_policy = "exact"
"#,
        )
        .unwrap();
        assert_eq!(config.balance.default_tolerance(), 25);
        assert_eq!(config.balance.repeat_policy(), RepeatPolicySetting::Exact);
    }

    #[test]
    fn test_unknown_repeat_policy_rejected() {
        let result: Result<LineupConfig, _> = toml::from_str(
            r#"
[balance]
repeat_policy = "sometimes"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_balance_merge_prefers_override() {
        let base = BalanceConfig {
            default_tolerance: Some(5),
            repeat_policy: Some(RepeatPolicySetting::Exact),
        };
        let override_config = BalanceConfig {
            default_tolerance: Some(20),
            repeat_policy: None,
        };
        let merged = BalanceConfig::merge(&base, &override_config);
        assert_eq!(merged.default_tolerance(), 20);
        // Unset override keeps the base value
        assert_eq!(merged.repeat_policy(), RepeatPolicySetting::Exact);
    }

    #[test]
    fn test_storage_merge() {
        let base = StorageConfig {
            default_scope: Some("league".to_string()),
        };
        let merged = StorageConfig::merge(&base, &StorageConfig::default());
        assert_eq!(merged.default_scope(), "league");
    }
}
