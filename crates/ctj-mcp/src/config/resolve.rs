//! Config resolution for claude-team-join.
//!
//! Resolves [`Paths`] from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. CLI flags (`--home`, `--config`)
//! 2. Environment variables (`CLAUDE_TEAM_JOIN_*`)
//! 3. TOML config file (`--config` or `~/.config/claude-team-join/config.toml`)
//! 4. Claude Code defaults beneath the home directory

use super::types::FileConfig;
use crate::cli::GlobalArgs;
use claude_team_join_core::home::get_home_dir;
use claude_team_join_core::Paths;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TEAMS_DIR_ENV: &str = "CLAUDE_TEAM_JOIN_TEAMS_DIR";
pub const SESSION_ENV_DIR_ENV: &str = "CLAUDE_TEAM_JOIN_SESSION_ENV_DIR";
pub const CLAUDE_CONFIG_ENV: &str = "CLAUDE_TEAM_JOIN_CLAUDE_CONFIG";
pub const SKILLS_DIR_ENV: &str = "CLAUDE_TEAM_JOIN_SKILLS_DIR";

/// Errors from configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{message}")]
    Home { message: String },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub home: PathBuf,
    /// The config file that was loaded, if any
    pub config_file: Option<PathBuf>,
    pub paths: Paths,
}

/// Default config file location beneath `home`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("claude-team-join").join("config.toml")
}

/// Resolve the complete configuration from flags, process environment and
/// config file.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined, if an explicit
/// `--config` file cannot be read, or if any config file fails to parse.
pub fn resolve_config(global: &GlobalArgs) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(global, |key| std::env::var(key).ok())
}

/// [`resolve_config`] with an injectable environment lookup.
pub fn resolve_with_env<F>(global: &GlobalArgs, env: F) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let home = match &global.home {
        Some(home) => home.clone(),
        None => get_home_dir().map_err(|e| ConfigError::Home {
            message: e.to_string(),
        })?,
    };

    let (file_config, config_file) = load_file_config(global.config.as_deref(), &home)?;

    let mut paths = Paths::from_home(&home);
    apply_file_config(&mut paths, file_config);
    apply_env_overrides(&mut paths, env);

    tracing::debug!(?paths, "resolved configuration");

    Ok(ResolvedConfig {
        home,
        config_file,
        paths,
    })
}

/// Load the explicit config file (must exist) or the default one (optional).
fn load_file_config(
    explicit: Option<&Path>,
    home: &Path,
) -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path(home);
            if !path.is_file() {
                return Ok((FileConfig::default(), None));
            }
            path
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let parsed = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok((parsed, Some(path)))
}

fn apply_file_config(paths: &mut Paths, file: FileConfig) {
    if let Some(p) = file.teams_dir {
        paths.teams_dir = p;
    }
    if let Some(p) = file.session_env_dir {
        paths.session_env_dir = p;
    }
    if let Some(p) = file.claude_config_path {
        paths.claude_config_path = p;
    }
    if let Some(p) = file.skills_dir {
        paths.skills_dir = p;
    }
}

/// Apply `CLAUDE_TEAM_JOIN_*` overrides. Empty values do not override.
fn apply_env_overrides<F>(paths: &mut Paths, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(p) = lookup(TEAMS_DIR_ENV) {
        paths.teams_dir = p;
    }
    if let Some(p) = lookup(SESSION_ENV_DIR_ENV) {
        paths.session_env_dir = p;
    }
    if let Some(p) = lookup(CLAUDE_CONFIG_ENV) {
        paths.claude_config_path = p;
    }
    if let Some(p) = lookup(SKILLS_DIR_ENV) {
        paths.skills_dir = p;
    }
}
