//! `uninstall` subcommand — remove the MCP server registration and the skills.

use crate::cli::GlobalArgs;
use crate::config::resolve_config;
use crate::install::{UninstallOutcome, uninstall_mcp_entry};
use crate::skills::uninstall_skills;

/// Run the `uninstall` subcommand.
///
/// # Errors
///
/// Returns an error if the host config or a skill directory cannot be
/// modified.
pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let resolved = resolve_config(global)?;
    let config_path = &resolved.paths.claude_config_path;

    match uninstall_mcp_entry(config_path)? {
        UninstallOutcome::Removed => {
            println!("Removed claude-team-join from {}", config_path.display());
        }
        UninstallOutcome::NotConfigured => {
            println!(
                "claude-team-join is not configured in {}",
                config_path.display()
            );
        }
    }

    let removed = uninstall_skills(&resolved.paths.skills_dir)?;
    if !removed.is_empty() {
        println!("Removed skills: {}", removed.join(", "));
    }
    Ok(())
}
