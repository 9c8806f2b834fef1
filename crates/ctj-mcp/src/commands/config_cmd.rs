//! `config` subcommand — show resolved configuration.
//!
//! Prints the resolved paths either as JSON (`--json`) or as a human-readable
//! key=value table.

use crate::cli::{ConfigArgs, GlobalArgs};
use crate::config::{ResolvedConfig, resolve_config};

/// Run the `config` subcommand.
///
/// # Errors
///
/// Returns an error if config resolution fails (e.g., unreadable TOML file or
/// home directory cannot be determined).
pub fn run(global: &GlobalArgs, args: ConfigArgs) -> anyhow::Result<()> {
    let resolved: ResolvedConfig = resolve_config(global)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let paths = &resolved.paths;
    println!("claude-team-join configuration:");
    println!("  home               = {}", resolved.home.display());
    println!(
        "  config_file        = {}",
        resolved
            .config_file
            .as_ref()
            .map_or_else(|| "<none>".to_string(), |p| p.display().to_string())
    );
    println!("  teams_dir          = {}", paths.teams_dir.display());
    println!("  session_env_dir    = {}", paths.session_env_dir.display());
    println!("  claude_config_path = {}", paths.claude_config_path.display());
    println!("  skills_dir         = {}", paths.skills_dir.display());
    Ok(())
}
