//! Error types for team persistence and team operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::store::TeamStore::write_team_config`].
///
/// Reads never produce these; see [`crate::store::TeamLookup`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Team name is empty, contains a path separator or is a `.`/`..` segment
    #[error("Invalid team name: {name:?}")]
    InvalidTeamName { name: String },

    /// File I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the config
    #[error("JSON serialization error for {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failures of the team operations, surfaced to MCP callers as `isError`
/// results.
///
/// Display strings are matched by substring in the installed skill documents
/// ("not found", "Could not detect", "Failed to write"); keep them stable.
#[derive(Error, Debug)]
pub enum TeamOpError {
    /// No readable, well-formed config for the team (or the name was rejected)
    #[error("Error: Team \"{team}\" not found. Use list_teams to see available teams.")]
    NotFound { team: String },

    /// The session marker directory holds no sessions
    #[error("Error: Could not detect current session ID from {}", session_env_dir.display())]
    NoCurrentSession { session_env_dir: PathBuf },

    /// Persisting the mutated config failed; the file on disk is unchanged
    #[error("Error: Failed to write team config: {source}")]
    WriteFailed {
        #[source]
        source: StoreError,
    },
}
