//! MCP stdio server core.
//!
//! [`McpServer`] reads JSON-RPC messages from an upstream reader (stdin in
//! production), answers them, and writes responses to an upstream writer
//! (stdout). It:
//!
//! - Auto-detects Content-Length vs newline-delimited framing per message and
//!   answers in the same framing
//! - Answers `initialize`, `ping`, `tools/list` and `tools/call`
//! - Consumes notifications silently
//! - Reports unknown methods and unparseable input as JSON-RPC errors
//!
//! Requests are handled one at a time in arrival order. Tool handlers do
//! synchronous file I/O; nothing is cached between requests.

use serde_json::{Value, json};
use tokio::io::{AsyncRead, AsyncWrite};

use claude_team_join_core::TeamService;

use crate::framing::{Framing, MessageReader, write_message};
use crate::team_tools::dispatch_tool_call;
use crate::tools::tool_definitions;

/// Protocol version offered when the client does not name one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "claude-team-join";

/// JSON-RPC error code: parse error.
pub const ERR_PARSE: i64 = -32700;

/// JSON-RPC error code: invalid request.
pub const ERR_INVALID_REQUEST: i64 = -32600;

/// JSON-RPC error code: method not found.
pub const ERR_METHOD_NOT_FOUND: i64 = -32601;

/// Serves the team tools over a single upstream connection.
#[derive(Debug, Clone)]
pub struct McpServer {
    service: TeamService,
}

impl McpServer {
    pub fn new(service: TeamService) -> Self {
        Self { service }
    }

    /// Run the server loop until upstream EOF.
    ///
    /// # Errors
    ///
    /// Returns an error on unrecoverable I/O failures (broken framing, closed
    /// output). Tool failures are reported to the client, never returned here.
    pub async fn run<R, W>(&self, upstream_in: R, mut upstream_out: W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = MessageReader::new(upstream_in);

        while let Some(frame) = reader.next_message().await? {
            let response = match serde_json::from_str::<Value>(&frame.body) {
                Ok(msg) => {
                    tracing::debug!(direction = "client->server", %msg);
                    self.handle_message(&msg)
                }
                Err(e) => {
                    tracing::warn!("failed to parse upstream JSON: {e}");
                    Some(make_error_response(
                        Value::Null,
                        ERR_PARSE,
                        &format!("Parse error: {e}"),
                    ))
                }
            };

            if let Some(response) = response {
                send(&mut upstream_out, frame.framing, &response).await?;
            }
        }

        tracing::info!("upstream EOF, shutting down server");
        Ok(())
    }

    /// Produce the response for one decoded message, or `None` for
    /// notifications and stray responses.
    pub fn handle_message(&self, msg: &Value) -> Option<Value> {
        let method = msg.get("method").and_then(Value::as_str);
        let id = msg.get("id").cloned();

        let (Some(method), Some(id)) = (method, id) else {
            if method.is_none() && msg.get("id").is_none() {
                return Some(make_error_response(
                    Value::Null,
                    ERR_INVALID_REQUEST,
                    "Invalid Request",
                ));
            }
            // Notification (method, no id) or a response from the client
            tracing::debug!(
                method = method.unwrap_or("<response>"),
                "ignoring message without reply"
            );
            return None;
        };

        let params = msg.get("params").cloned().unwrap_or(Value::Null);
        let response = match method {
            "initialize" => make_result(&id, initialize_result(&params)),
            "ping" => make_result(&id, json!({})),
            "tools/list" => make_result(&id, json!({ "tools": tool_definitions() })),
            "tools/call" => {
                let tool_name = params.get("name").and_then(Value::as_str).unwrap_or("");
                let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
                tracing::info!(tool = tool_name, "tools/call");
                dispatch_tool_call(&id, tool_name, &args, &self.service)
            }
            other => make_error_response(
                id,
                ERR_METHOD_NOT_FOUND,
                &format!("Method not found: {other}"),
            ),
        };
        Some(response)
    }
}

async fn send<W: AsyncWrite + Unpin>(
    writer: &mut W,
    framing: Framing,
    response: &Value,
) -> anyhow::Result<()> {
    let serialized = serde_json::to_string(response)?;
    tracing::debug!(direction = "server->client", %response);
    write_message(writer, framing, &serialized).await?;
    Ok(())
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);
    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn make_result(id: &Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

/// Construct a JSON-RPC error response.
pub fn make_error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message
        }
    })
}
