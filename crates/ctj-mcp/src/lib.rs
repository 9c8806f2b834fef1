//! claude-team-join library crate.
//!
//! Provides the MCP stdio server, framing, tool schemas and handlers,
//! configuration, installer and CLI types for the `claude-team-join` binary.
//! Exposed as a library for integration testing.

pub mod cli;
pub mod commands;
pub mod config;
pub mod framing;
pub mod install;
pub mod server;
pub mod skills;
pub mod team_tools;
pub mod tools;
