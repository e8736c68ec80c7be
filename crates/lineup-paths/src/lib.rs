use std::path::{Path, PathBuf};

/// Environment variable that overrides the base directory (default `~/.lineup`).
pub const LINEUP_HOME_ENV: &str = "LINEUP_HOME";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found; set $HOME or $LINEUP_HOME")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.lineup/` directory layout.
///
/// Single source of truth for every path under `~/.lineup/`. Use `resolve()` in
/// production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct LineupPaths {
    lineup_dir: PathBuf,
}

impl LineupPaths {
    /// Resolve paths from `$LINEUP_HOME`, falling back to `~/.lineup`.
    pub fn resolve() -> Result<Self, PathError> {
        if let Some(dir) = std::env::var_os(LINEUP_HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                lineup_dir: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            lineup_dir: home.join(".lineup"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(lineup_dir: PathBuf) -> Self {
        Self { lineup_dir }
    }

    /// The base `~/.lineup` directory.
    pub fn lineup_dir(&self) -> &Path {
        &self.lineup_dir
    }

    pub fn scopes_dir(&self) -> PathBuf {
        self.lineup_dir.join("scopes")
    }

    pub fn user_config(&self) -> PathBuf {
        self.lineup_dir.join("config.toml")
    }

    /// Lobby data file for one scope: `scopes/<safe_scope>.json`.
    pub fn scope_file(&self, scope: &str) -> PathBuf {
        let safe_scope = scope.replace(['/', '\\'], "_");
        self.scopes_dir().join(format!("{safe_scope}.json"))
    }

    /// Project-level config: `<project_root>/.lineup/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".lineup").join("config.toml")
    }
}
