//! Session marker directory reader
//!
//! Claude Code keeps one directory per live session under
//! `~/.claude/session-env/`, touching it while the session runs. Only the
//! directory names and their mtimes are used; contents are never read.

use crate::store::is_valid_entry_name;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// A session whose marker was touched less than this long ago is active.
pub const SESSION_ACTIVE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Reads `<session_env_dir>/<session-id>/` markers.
#[derive(Debug, Clone)]
pub struct SessionDirectory {
    root: PathBuf,
}

impl SessionDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the most recently modified marker directory.
    ///
    /// Ties keep the first entry encountered. Entries that are not
    /// directories, or whose mtime cannot be read, are skipped. Returns
    /// `None` when the root is missing, unreadable or empty.
    pub fn current_session_id(&self) -> Option<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %self.root.display(), "cannot list sessions: {e}");
                return None;
            }
        };

        let mut newest: Option<(SystemTime, String)> = None;
        for entry in entries.flatten() {
            let Ok(meta) = fs::metadata(entry.path()) else {
                continue;
            };
            if !meta.is_dir() {
                continue;
            }
            let Ok(mtime) = meta.modified() else {
                continue;
            };
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if newest.as_ref().is_none_or(|(t, _)| mtime > *t) {
                newest = Some((mtime, name));
            }
        }

        newest.map(|(_, name)| name)
    }

    /// Whether `session_id`'s marker was modified within
    /// [`SESSION_ACTIVE_WINDOW`] of now.
    pub fn is_session_active(&self, session_id: &str) -> bool {
        self.is_session_active_at(session_id, SystemTime::now())
    }

    /// [`Self::is_session_active`] against an explicit clock.
    ///
    /// The window is half-open: an age of exactly five minutes is stale. A
    /// marker dated after `now` counts as active. Any stat failure, including
    /// a missing marker, is inactive.
    pub fn is_session_active_at(&self, session_id: &str, now: SystemTime) -> bool {
        if !is_valid_entry_name(session_id) {
            return false;
        }
        let Ok(mtime) = fs::metadata(self.root.join(session_id)).and_then(|m| m.modified()) else {
            return false;
        };
        match now.duration_since(mtime) {
            Ok(age) => age < SESSION_ACTIVE_WINDOW,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SessionDirectory) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("session-env");
        fs::create_dir_all(&root).unwrap();
        let sessions = SessionDirectory::new(&root);
        (temp, sessions)
    }

    fn make_session(sessions: &SessionDirectory, id: &str, mtime: SystemTime) {
        let dir = sessions.root().join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::File::open(&dir).unwrap().set_modified(mtime).unwrap();
    }

    fn at_ms(ms: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(ms)
    }

    #[test]
    fn test_current_session_missing_root() {
        let temp = TempDir::new().unwrap();
        let sessions = SessionDirectory::new(temp.path().join("nope"));
        assert_eq!(sessions.current_session_id(), None);
    }

    #[test]
    fn test_current_session_empty_root() {
        let (_temp, sessions) = setup();
        assert_eq!(sessions.current_session_id(), None);
    }

    #[test]
    fn test_current_session_ignores_files() {
        let (_temp, sessions) = setup();
        fs::write(sessions.root().join("not-a-session"), "x").unwrap();
        assert_eq!(sessions.current_session_id(), None);

        make_session(&sessions, "real", at_ms(1_000_000));
        assert_eq!(sessions.current_session_id().as_deref(), Some("real"));
    }

    #[test]
    fn test_current_session_picks_newest_mtime_not_name() {
        let (_temp, sessions) = setup();
        make_session(&sessions, "zzz-older", at_ms(1_700_000_000_000));
        make_session(&sessions, "aaa-newer", at_ms(1_700_000_100_000));
        assert_eq!(sessions.current_session_id().as_deref(), Some("aaa-newer"));

        make_session(&sessions, "zzz-older", at_ms(1_700_000_200_000));
        assert_eq!(sessions.current_session_id().as_deref(), Some("zzz-older"));
    }

    #[test]
    fn test_active_within_window() {
        let (_temp, sessions) = setup();
        let mtime = at_ms(1_700_000_000_000);
        make_session(&sessions, "s1", mtime);

        assert!(sessions.is_session_active_at("s1", mtime));
        assert!(sessions.is_session_active_at("s1", at_ms(1_700_000_299_999)));
    }

    #[test]
    fn test_stale_at_exactly_five_minutes() {
        let (_temp, sessions) = setup();
        make_session(&sessions, "s1", at_ms(1_700_000_000_000));

        assert!(!sessions.is_session_active_at("s1", at_ms(1_700_000_300_000)));
        assert!(!sessions.is_session_active_at("s1", at_ms(1_700_001_000_000)));
    }

    #[test]
    fn test_future_mtime_is_active() {
        let (_temp, sessions) = setup();
        make_session(&sessions, "s1", at_ms(1_700_000_100_000));
        assert!(sessions.is_session_active_at("s1", at_ms(1_700_000_000_000)));
    }

    #[test]
    fn test_fresh_marker_is_active_now() {
        let (_temp, sessions) = setup();
        fs::create_dir_all(sessions.root().join("live")).unwrap();
        assert!(sessions.is_session_active("live"));
    }

    #[test]
    fn test_missing_or_invalid_session_is_inactive() {
        let (_temp, sessions) = setup();
        assert!(!sessions.is_session_active("ghost"));
        assert!(!sessions.is_session_active(""));
        assert!(!sessions.is_session_active(".."));
    }
}
