//! Command implementations for claude-team-join subcommands.
//!
//! Each module corresponds to a top-level subcommand exposed by the CLI.

pub mod config_cmd;
pub mod install;
pub mod serve;
pub mod uninstall;
