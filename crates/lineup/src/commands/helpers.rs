use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, warn};

use lineup_config::{LineupConfig, is_valid_scope_name};
use lineup_core::lobby::parse_identity;
use lineup_core::{Identity, LobbyStore, events};
use lineup_paths::LineupPaths;

use crate::color;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> LineupConfig {
    match LineupConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} Could not load config: {}. Using defaults.\n  {}",
                color::warning("Warning:"),
                e,
                color::hint(
                    "Tip: Check ~/.lineup/config.toml and ./.lineup/config.toml for syntax errors."
                ),
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            LineupConfig::default()
        }
    }
}

/// Scope from `--scope`, falling back to the configured default.
pub fn resolve_scope(
    matches: &ArgMatches,
    config: &LineupConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let scope = matches
        .get_one::<String>("scope")
        .map(String::as_str)
        .unwrap_or_else(|| config.storage.default_scope());

    if !is_valid_scope_name(scope) {
        eprintln!(
            "{} '{}': use letters, digits, '-', '_' or '.'",
            color::error("Invalid scope name"),
            scope
        );
        error!(event = "cli.scope_invalid", scope = scope);
        return Err(format!("Invalid scope name: {}", scope).into());
    }

    Ok(scope.to_string())
}

/// Location of the lobby file for `scope`.
pub fn scope_path(scope: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match LineupPaths::resolve() {
        Ok(paths) => Ok(paths.scope_file(scope)),
        Err(e) => {
            eprintln!("{} {}", color::error("Could not locate lineup directory:"), e);
            error!(event = "cli.paths_resolve_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Open the lobby store for the scope selected on the command line.
pub fn open_store(
    matches: &ArgMatches,
) -> Result<(LobbyStore, String), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let scope = resolve_scope(matches, &config)?;
    let path = scope_path(&scope)?;

    match LobbyStore::open(&path, &config) {
        Ok(store) => Ok((store, scope)),
        Err(e) => {
            eprintln!("{} '{}': {}", color::error("Could not open scope"), scope, e);
            error!(event = "cli.store_open_failed", scope = %scope, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Parse a member argument, reporting an empty one to the user.
pub fn parse_member(raw: &str) -> Result<Identity, Box<dyn std::error::Error>> {
    parse_identity(raw).map_err(|e| {
        eprintln!("{} '{}': {}", color::error("Invalid member"), raw, e);
        events::log_app_error(&e);
        e.into()
    })
}

/// Format a count with singular/plural noun.
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "member", "members"), "1 member");
        assert_eq!(format_count(0, "member", "members"), "0 members");
        assert_eq!(format_count(10, "member", "members"), "10 members");
    }

    #[test]
    fn test_parse_member_normalizes_mentions() {
        assert_eq!(parse_member("<@!99>").unwrap(), Identity::from("99"));
        assert_eq!(parse_member("@alice").unwrap(), Identity::from("alice"));
    }

    #[test]
    fn test_parse_member_rejects_empty() {
        assert!(parse_member("  ").is_err());
    }

    #[test]
    fn test_resolve_scope_prefers_flag() {
        let matches = crate::app::build_cli()
            .try_get_matches_from(vec!["lineup", "members", "--scope", "team-b"])
            .unwrap();
        let sub = matches.subcommand_matches("members").unwrap();
        let scope = resolve_scope(sub, &LineupConfig::default()).unwrap();
        assert_eq!(scope, "team-b");
    }

    #[test]
    fn test_resolve_scope_defaults_from_config() {
        let matches = crate::app::build_cli()
            .try_get_matches_from(vec!["lineup", "members"])
            .unwrap();
        let sub = matches.subcommand_matches("members").unwrap();
        let scope = resolve_scope(sub, &LineupConfig::default()).unwrap();
        assert_eq!(scope, "default");
    }

    #[test]
    fn test_resolve_scope_rejects_traversal() {
        let matches = crate::app::build_cli()
            .try_get_matches_from(vec!["lineup", "members", "--scope", "../etc"])
            .unwrap();
        let sub = matches.subcommand_matches("members").unwrap();
        assert!(resolve_scope(sub, &LineupConfig::default()).is_err());
    }
}
