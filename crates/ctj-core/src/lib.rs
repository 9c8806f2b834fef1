//! Core types and operations for claude-team-join
//!
//! This crate reads and mutates Claude agent team state stored under
//! `~/.claude/teams/` and interprets the session markers under
//! `~/.claude/session-env/`, so that a fresh session can take over as the
//! lead of a team whose original lead session has gone away.
//!
//! Layering, leaf-first:
//! - [`store::TeamStore`] is the only code that touches team JSON on disk
//! - [`session::SessionDirectory`] owns all session mtime interpretation
//! - [`service::TeamService`] implements list / join / members on top of both
//!
//! A team config is kept as the parsed JSON document, so a read-modify-write
//! cycle never drops or reorders data written by Claude Code itself.

pub mod error;
pub mod home;
pub mod logging;
pub mod paths;
pub mod schema;
pub mod service;
pub mod session;
pub mod store;
pub mod time;

pub use error::{StoreError, TeamOpError};
pub use paths::Paths;
pub use schema::{TEAM_LEAD_NAME, TeamConfig, TeamMember};
pub use service::TeamService;
pub use session::SessionDirectory;
pub use store::{AbsentReason, TeamLookup, TeamStore};
