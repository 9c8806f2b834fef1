//! On-disk configuration format.
//!
//! [`FileConfig`] is deserialized from `~/.config/claude-team-join/config.toml`
//! (or the file passed with `--config`). Every key is optional; an absent key
//! keeps the Claude Code default derived from the home directory.
//!
//! # Example
//!
//! ```toml
//! teams_dir = "/srv/claude/teams"
//! session_env_dir = "/srv/claude/session-env"
//! claude_config_path = "/srv/claude.json"
//! skills_dir = "/srv/claude/skills"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub teams_dir: Option<PathBuf>,

    #[serde(default)]
    pub session_env_dir: Option<PathBuf>,

    #[serde(default)]
    pub claude_config_path: Option<PathBuf>,

    #[serde(default)]
    pub skills_dir: Option<PathBuf>,
}
