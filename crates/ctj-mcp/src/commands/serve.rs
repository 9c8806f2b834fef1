//! `serve` subcommand — start the MCP stdio server.
//!
//! Reads MCP JSON-RPC messages from stdin and writes responses to stdout. See
//! [`crate::server`] for request handling and [`crate::framing`] for framing
//! details.

use crate::cli::GlobalArgs;
use crate::config::resolve_config;
use crate::server::McpServer;
use claude_team_join_core::TeamService;

/// Run the `serve` subcommand.
///
/// Resolves configuration, then enters the server loop which reads from stdin
/// and writes to stdout until EOF.
///
/// # Errors
///
/// Returns an error if configuration resolution fails or the server loop
/// encounters an unrecoverable I/O error.
pub async fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let resolved = resolve_config(global)?;
    tracing::info!(
        teams_dir = %resolved.paths.teams_dir.display(),
        session_env_dir = %resolved.paths.session_env_dir.display(),
        "starting claude-team-join MCP server"
    );

    let server = McpServer::new(TeamService::from_paths(&resolved.paths));
    server.run(tokio::io::stdin(), tokio::io::stdout()).await
}
