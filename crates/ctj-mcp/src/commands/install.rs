//! `install` subcommand — register the MCP server and install the skills.

use crate::cli::{GlobalArgs, InstallArgs};
use crate::config::resolve_config;
use crate::install::{InstallOutcome, install_mcp_entry};
use crate::skills::install_skills;

/// Run the `install` subcommand.
///
/// # Errors
///
/// Returns an error if the host config holds malformed JSON or cannot be
/// written, or if the skill files cannot be written.
pub fn run(global: &GlobalArgs, args: InstallArgs) -> anyhow::Result<()> {
    let resolved = resolve_config(global)?;
    let config_path = &resolved.paths.claude_config_path;

    let InstallOutcome::Added { created } = install_mcp_entry(config_path)?;
    if created {
        println!("Created {}", config_path.display());
    }
    println!("Added claude-team-join to {}", config_path.display());

    if !args.no_skills {
        let skills_dir = &resolved.paths.skills_dir;
        let written = install_skills(skills_dir)?;
        println!(
            "Installed {} skills to {}",
            written.len(),
            skills_dir.display()
        );
    }

    println!("  Restart Claude Code to pick up the new MCP server.");
    Ok(())
}
