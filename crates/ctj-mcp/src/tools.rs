//! MCP tool definitions advertised in `tools/list`.
//!
//! The handlers live in [`crate::team_tools`]; this module only owns the
//! names and JSON schemas.

use serde_json::{Value, json};

pub const LIST_TEAMS: &str = "list_teams";
pub const TEAM_JOIN: &str = "team_join";
pub const GET_TEAM_MEMBERS: &str = "get_team_members";

/// Return all tool definitions as JSON values.
pub fn tool_definitions() -> Vec<Value> {
    vec![list_teams_schema(), team_join_schema(), get_team_members_schema()]
}

fn list_teams_schema() -> Value {
    json!({
        "name": LIST_TEAMS,
        "description": "List all Claude Code agent teams with their members and whether the lead session is current, active in another session, or stale",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

fn team_join_schema() -> Value {
    json!({
        "name": TEAM_JOIN,
        "description": "Rejoin an orphaned team as its lead: points the team at the current session and marks every member inactive so teammates can be re-spawned",
        "inputSchema": {
            "type": "object",
            "properties": {
                "team_name": {"type": "string", "description": "Name of the team to rejoin"}
            },
            "required": ["team_name"]
        }
    })
}

fn get_team_members_schema() -> Value {
    json!({
        "name": GET_TEAM_MEMBERS,
        "description": "Get the spawn configuration (type, model, prompt, cwd, ...) of every non-lead teammate for re-spawning",
        "inputSchema": {
            "type": "object",
            "properties": {
                "team_name": {"type": "string", "description": "Name of the team to inspect"}
            },
            "required": ["team_name"]
        }
    })
}
