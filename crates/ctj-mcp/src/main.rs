//! claude-team-join — MCP server for rejoining orphaned Claude Code teams.
//!
//! # Subcommands
//!
//! - `serve`     — Start the MCP stdio server (default)
//! - `install`   — Register the server in `~/.claude.json` and install skills
//! - `uninstall` — Remove the registration and the skills
//! - `config`    — Show resolved configuration

use clap::Parser;
use claude_team_join_core::logging;

use claude_team_join::cli::{Cli, Commands};
use claude_team_join::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let global = cli.global();

    match cli.command.unwrap_or_default() {
        Commands::Serve => commands::serve::run(&global).await,
        Commands::Install(args) => commands::install::run(&global, args),
        Commands::Uninstall => commands::uninstall::run(&global),
        Commands::Config(args) => commands::config_cmd::run(&global, args),
    }
}
