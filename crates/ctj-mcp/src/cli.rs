//! CLI argument types for claude-team-join.
//!
//! Defines the top-level [`Cli`] struct and all subcommand [`Args`] using
//! clap's derive macros. Each subcommand maps to a module in [`crate::commands`].

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// MCP server for rejoining orphaned Claude Code agent teams
#[derive(Parser, Debug)]
#[command(name = "claude-team-join", version, about)]
pub struct Cli {
    /// Path to config.toml (default: ~/.config/claude-team-join/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Home directory override (default: $CLAUDE_TEAM_JOIN_HOME or the user's home)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Options shared by every subcommand.
    pub fn global(&self) -> GlobalArgs {
        GlobalArgs {
            config: self.config.clone(),
            home: self.home.clone(),
        }
    }
}

/// Global flags passed down to command implementations.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Default)]
pub enum Commands {
    /// Start the MCP stdio server
    #[default]
    Serve,
    /// Register the MCP server in ~/.claude.json and install the skills
    Install(InstallArgs),
    /// Remove the MCP server registration and the skills
    Uninstall,
    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `install` subcommand
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Only register the MCP server; leave the skills alone
    #[arg(long)]
    pub no_skills: bool,
}

/// Arguments for the `config` subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
