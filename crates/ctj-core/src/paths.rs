//! Root directories consumed by the core.
//!
//! [`Paths`] is resolved once at startup and handed to each component's
//! constructor; nothing in the crate reads a process-wide path.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Filesystem roots used by the store, session reader and installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paths {
    /// `<teams_dir>/<team>/config.json` holds one team each.
    pub teams_dir: PathBuf,
    /// `<session_env_dir>/<session-id>/` marker directories.
    pub session_env_dir: PathBuf,
    /// Host application config carrying the `mcpServers` mapping.
    pub claude_config_path: PathBuf,
    /// Destination of the skills bundle.
    pub skills_dir: PathBuf,
}

impl Paths {
    /// Claude Code's default layout beneath `home`.
    pub fn from_home(home: &Path) -> Self {
        let claude_dir = home.join(".claude");
        Self {
            teams_dir: claude_dir.join("teams"),
            session_env_dir: claude_dir.join("session-env"),
            claude_config_path: home.join(".claude.json"),
            skills_dir: claude_dir.join("skills"),
        }
    }
}
