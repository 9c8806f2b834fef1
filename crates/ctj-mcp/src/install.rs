//! Registration of the server in the Claude Code host config (`~/.claude.json`).
//!
//! Only the `mcpServers.claude-team-join` entry is touched; every other key in
//! the document is preserved in its original order.

use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key of this server beneath `mcpServers`.
pub const MCP_SERVER_KEY: &str = "claude-team-join";

/// Errors from editing the host config.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("{path} contains malformed JSON. Fix it manually before running install.")]
    MalformedConfig { path: PathBuf },

    #[error("{path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Entry inserted; the file was created when it did not exist.
    Added { created: bool },
}

/// Result of an uninstall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed,
    NotConfigured,
}

/// The `mcpServers` entry written by [`install_mcp_entry`].
pub fn server_entry() -> Value {
    json!({
        "type": "stdio",
        "command": "claude-team-join",
        "args": ["serve"]
    })
}

/// Add (or overwrite) the server entry in the host config at `config_path`.
///
/// A missing file is created. A file holding malformed JSON is left untouched.
///
/// # Errors
///
/// Returns [`InstallError::MalformedConfig`] for unparseable content,
/// [`InstallError::NotAnObject`] when the document or its `mcpServers` value
/// is not an object, and I/O errors otherwise.
pub fn install_mcp_entry(config_path: &Path) -> Result<InstallOutcome, InstallError> {
    let (mut root, created) = match fs::read_to_string(config_path) {
        Ok(raw) => {
            let parsed: Value =
                serde_json::from_str(&raw).map_err(|_| InstallError::MalformedConfig {
                    path: config_path.to_path_buf(),
                })?;
            (parsed, false)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Value::Object(Map::new()), true),
        Err(source) => {
            return Err(InstallError::Read {
                path: config_path.to_path_buf(),
                source,
            });
        }
    };

    let not_object = || InstallError::NotAnObject {
        path: config_path.to_path_buf(),
    };
    let obj = root.as_object_mut().ok_or_else(not_object)?;
    let servers = obj
        .entry("mcpServers")
        .or_insert_with(|| Value::Object(Map::new()));
    if servers.is_null() {
        *servers = Value::Object(Map::new());
    }
    servers
        .as_object_mut()
        .ok_or_else(not_object)?
        .insert(MCP_SERVER_KEY.to_string(), server_entry());

    write_config(config_path, &root)?;
    tracing::info!(path = %config_path.display(), created, "registered MCP server");
    Ok(InstallOutcome::Added { created })
}

/// Remove the server entry from the host config at `config_path`.
///
/// A missing or unparseable file counts as "not configured" and is not
/// modified.
///
/// # Errors
///
/// Returns an error only if rewriting the file fails.
pub fn uninstall_mcp_entry(config_path: &Path) -> Result<UninstallOutcome, InstallError> {
    let Some(mut root) = fs::read_to_string(config_path)
        .ok()
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
    else {
        return Ok(UninstallOutcome::NotConfigured);
    };

    let removed = root
        .get_mut("mcpServers")
        .and_then(Value::as_object_mut)
        .and_then(|servers| servers.shift_remove(MCP_SERVER_KEY))
        .is_some();

    if !removed {
        return Ok(UninstallOutcome::NotConfigured);
    }

    write_config(config_path, &root)?;
    tracing::info!(path = %config_path.display(), "removed MCP server registration");
    Ok(UninstallOutcome::Removed)
}

/// Write `value` as 2-space indented JSON with a trailing newline.
fn write_config(path: &Path, value: &Value) -> Result<(), InstallError> {
    let write_err = |source| InstallError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut serialized = serde_json::to_string_pretty(value)
        .map_err(|e| write_err(std::io::Error::other(e)))?;
    serialized.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, serialized).map_err(write_err)
}
