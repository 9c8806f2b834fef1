//! Team tool handlers for the MCP server.
//!
//! - [`handle_list_teams`] — summarize every team and its lead-session status
//! - [`handle_team_join`] — take over a team as lead from the current session
//! - [`handle_get_team_members`] — spawn definitions for non-lead teammates
//!
//! Handlers are synchronous: each one re-reads the disk through
//! [`TeamService`] and returns a complete JSON-RPC response. Success payloads
//! are pretty-printed JSON in a single text content block. Operation failures
//! use `isError: true` inside `result` rather than a JSON-RPC `error`, so the
//! calling model sees the message instead of a protocol fault.

use claude_team_join_core::TeamService;
use claude_team_join_core::service::TeamListing;
use serde::Serialize;
use serde_json::{Value, json};

use crate::tools::{GET_TEAM_MEMBERS, LIST_TEAMS, TEAM_JOIN};

/// Construct a successful MCP result response.
fn make_mcp_success(id: &Value, text: String) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "content": [{"type": "text", "text": text}]
        }
    })
}

/// Construct an MCP result response that signals an application-level error.
pub fn make_mcp_error_result(id: &Value, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "content": [{"type": "text", "text": message}],
            "isError": true
        }
    })
}

/// Render `payload` as 2-space pretty JSON inside a success response.
fn make_json_success<T: Serialize>(id: &Value, payload: &T) -> Value {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => make_mcp_success(id, text),
        Err(e) => make_mcp_error_result(id, &format!("Error: failed to encode result: {e}")),
    }
}

/// Extract the required `team_name` string argument.
fn team_name_arg(args: &Value) -> Option<&str> {
    args.get("team_name").and_then(Value::as_str)
}

const TEAM_NAME_REQUIRED: &str = "Error: team_name is required";

/// Handle a `list_teams` tool call.
///
/// With no team directories at all the text is `No teams found in <dir>`;
/// otherwise it is a JSON array (possibly empty when every config was bad).
pub fn handle_list_teams(id: &Value, service: &TeamService) -> Value {
    match service.list_teams() {
        TeamListing::NoTeams { teams_dir } => {
            make_mcp_success(id, format!("No teams found in {}", teams_dir.display()))
        }
        TeamListing::Teams(teams) => make_json_success(id, &teams),
    }
}

/// Handle a `team_join` tool call.
pub fn handle_team_join(id: &Value, args: &Value, service: &TeamService) -> Value {
    let Some(team_name) = team_name_arg(args) else {
        return make_mcp_error_result(id, TEAM_NAME_REQUIRED);
    };

    match service.join_team(team_name) {
        Ok(outcome) => make_json_success(id, &outcome),
        Err(e) => {
            tracing::warn!(team = team_name, "team_join failed: {e}");
            make_mcp_error_result(id, &e.to_string())
        }
    }
}

/// Handle a `get_team_members` tool call.
pub fn handle_get_team_members(id: &Value, args: &Value, service: &TeamService) -> Value {
    let Some(team_name) = team_name_arg(args) else {
        return make_mcp_error_result(id, TEAM_NAME_REQUIRED);
    };

    match service.team_members(team_name) {
        Ok(members) => make_json_success(id, &members),
        Err(e) => make_mcp_error_result(id, &e.to_string()),
    }
}

/// Route a `tools/call` by tool name.
pub fn dispatch_tool_call(
    id: &Value,
    tool_name: &str,
    args: &Value,
    service: &TeamService,
) -> Value {
    match tool_name {
        LIST_TEAMS => handle_list_teams(id, service),
        TEAM_JOIN => handle_team_join(id, args, service),
        GET_TEAM_MEMBERS => handle_get_team_members(id, args, service),
        other => make_mcp_error_result(id, &format!("Error: Unknown tool: {other}")),
    }
}
