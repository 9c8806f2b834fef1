//! Canonical home directory resolution
//!
//! Every default path (`~/.claude/teams`, `~/.claude/session-env`, ...) hangs
//! off the directory returned here. Tests and custom deployments redirect it
//! with the `CLAUDE_TEAM_JOIN_HOME` environment variable.
//!
//! # Precedence
//!
//! 1. `CLAUDE_TEAM_JOIN_HOME` environment variable (if set and non-blank)
//! 2. `dirs::home_dir()` platform default
//!
//! # Testing
//!
//! Integration tests MUST set `CLAUDE_TEAM_JOIN_HOME` to a temp directory:
//!
//! ```ignore
//! use assert_cmd::Command;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let mut cmd = Command::cargo_bin("claude-team-join").unwrap();
//! cmd.env("CLAUDE_TEAM_JOIN_HOME", temp_dir.path());
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "CLAUDE_TEAM_JOIN_HOME";

/// Get the home directory for claude-team-join operations.
///
/// Surrounding whitespace in `CLAUDE_TEAM_JOIN_HOME` is trimmed; a blank value
/// is treated as unset.
///
/// # Errors
///
/// Returns an error if the override is unset AND the platform home directory
/// cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}
