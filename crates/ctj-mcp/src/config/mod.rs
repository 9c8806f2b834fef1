//! Configuration resolution for claude-team-join.
//!
//! The entry point is [`resolve_config`], which combines CLI flags,
//! `CLAUDE_TEAM_JOIN_*` environment variables and an optional TOML file into
//! the [`Paths`](claude_team_join_core::Paths) handed to the core.
//!
//! See [`resolve`] for the full priority chain and [`types`] for the file format.

mod resolve;
mod types;

pub use resolve::{default_config_path, resolve_config, ConfigError, ResolvedConfig};
pub use types::FileConfig;
