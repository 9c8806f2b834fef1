//! Team config persistence
//!
//! [`TeamStore`] is the only component that builds team paths or touches
//! `config.json`. The read and write paths apply different failure policies:
//!
//! - **Reads** never fail. Every problem collapses into
//!   [`TeamLookup::Absent`], so callers cannot tell "no such team" from
//!   "name rejected" from "garbage on disk". Unexpected I/O errors are logged.
//! - **Writes** propagate every problem as a [`StoreError`], including a
//!   rejected team name.

use crate::error::StoreError;
use crate::schema::TeamConfig;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name of a team's config inside its directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Result of looking up a team config.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamLookup {
    /// A well-formed config was read.
    Found(TeamConfig),
    /// No usable config; the reason is informational only.
    Absent(AbsentReason),
}

/// Why a lookup came back [`TeamLookup::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentReason {
    /// Empty name, path separator or `.`/`..` segment.
    InvalidName,
    /// `config.json` does not exist.
    Missing,
    /// Not JSON, not an object, or `members` not an array.
    Malformed,
    /// Any other read failure (permissions, is-a-directory, ...).
    Unreadable,
}

impl TeamLookup {
    /// Convert into an `Option`, discarding the absence reason.
    pub fn found(self) -> Option<TeamConfig> {
        match self {
            TeamLookup::Found(config) => Some(config),
            TeamLookup::Absent(_) => None,
        }
    }
}

/// Reject names that could escape the teams root or address the root itself.
///
/// Used for team names and session ids alike.
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// Reads and writes `<teams_dir>/<team>/config.json`.
#[derive(Debug, Clone)]
pub struct TeamStore {
    teams_dir: PathBuf,
}

impl TeamStore {
    pub fn new(teams_dir: impl Into<PathBuf>) -> Self {
        Self {
            teams_dir: teams_dir.into(),
        }
    }

    /// Root directory holding one subdirectory per team.
    pub fn teams_dir(&self) -> &Path {
        &self.teams_dir
    }

    /// Path of a team's config file. Does not validate `team`.
    pub fn config_path(&self, team: &str) -> PathBuf {
        self.teams_dir.join(team).join(CONFIG_FILE_NAME)
    }

    /// Names of the immediate subdirectories of the teams root.
    ///
    /// Returns an empty list when the root is missing, unreadable or not a
    /// directory. Names that are not valid UTF-8 are skipped.
    pub fn list_team_names(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.teams_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %self.teams_dir.display(), "cannot list teams: {e}");
                return Vec::new();
            }
        };

        entries
            .flatten()
            .filter(|entry| fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    /// Read and validate a team config. Never returns an error.
    pub fn read_team_config(&self, team: &str) -> TeamLookup {
        if !is_valid_entry_name(team) {
            tracing::debug!(team, "rejected team name");
            return TeamLookup::Absent(AbsentReason::InvalidName);
        }

        let path = self.config_path(team);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return TeamLookup::Absent(AbsentReason::Missing);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read team config: {e}");
                return TeamLookup::Absent(AbsentReason::Unreadable);
            }
        };

        match parse_team_config(&raw) {
            Some(config) => TeamLookup::Found(config),
            None => {
                tracing::warn!(path = %path.display(), "ignoring malformed team config");
                TeamLookup::Absent(AbsentReason::Malformed)
            }
        }
    }

    /// Persist `config` as 4-space pretty-printed JSON.
    ///
    /// The document is serialized in full before anything touches the disk,
    /// then written to a sibling temp file and renamed over `config.json`, so
    /// a failed write leaves the previous file intact. The team directory is
    /// never created here.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidTeamName`] for a rejected name, [`StoreError::Io`]
    /// when the directory is missing or not writable.
    pub fn write_team_config(&self, team: &str, config: &TeamConfig) -> Result<(), StoreError> {
        if !is_valid_entry_name(team) {
            return Err(StoreError::InvalidTeamName {
                name: team.to_string(),
            });
        }

        let path = self.config_path(team);
        let serialized = to_pretty_json(config).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(serialized.as_bytes())?;
            file.sync_all()
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }

        tracing::debug!(path = %path.display(), "wrote team config");
        Ok(())
    }
}

/// Parse a config document. Only the object + `members` array shape is
/// checked; member elements and other fields may hold anything.
fn parse_team_config(raw: &str) -> Option<TeamConfig> {
    let value: Value = serde_json::from_str(raw).ok()?;
    TeamConfig::from_value(value)
}

/// Serialize with a 4-space indent, matching the files Claude Code writes.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
