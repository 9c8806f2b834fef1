//! Team configuration schema
//!
//! Claude Code owns the shape of `config.json`; this crate only requires that
//! the document is an object with a `members` array. Elements of `members` and
//! every other field may have any JSON shape. [`TeamConfig`] therefore keeps
//! the parsed document itself and projects typed values out of it on demand:
//! a field of an unexpected type reads as absent, and a rewrite emits every key
//! in its original order with its original value.

use serde::Serialize;
use serde_json::{Map, Value};

/// Member name reserved for the lead's own record.
pub const TEAM_LEAD_NAME: &str = "team-lead";

const MEMBERS_KEY: &str = "members";
const LEAD_SESSION_ID_KEY: &str = "leadSessionId";
const LEAD_AGENT_ID_KEY: &str = "leadAgentId";
const IS_ACTIVE_KEY: &str = "isActive";

/// Team configuration
///
/// Stored at `~/.claude/teams/{team_name}/config.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TeamConfig {
    document: Map<String, Value>,
}

impl TeamConfig {
    /// Accept `value` if it is an object whose `members` field is an array.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(document) if document.get(MEMBERS_KEY).is_some_and(Value::is_array) => {
                Some(Self { document })
            }
            _ => None,
        }
    }

    /// The underlying document.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Team name (matches directory name)
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Human-readable team purpose
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// `createdAt` as epoch milliseconds.
    ///
    /// Fractional values are truncated toward zero. Non-numeric values and
    /// numbers outside the `i64` range read as `None`.
    pub fn created_at_ms(&self) -> Option<i64> {
        let value = self.document.get("createdAt")?;
        if let Some(ms) = value.as_i64() {
            return Some(ms);
        }
        let ms = value.as_f64()?.trunc();
        (ms.is_finite() && ms >= i64::MIN as f64 && ms < i64::MAX as f64).then_some(ms as i64)
    }

    pub fn lead_agent_id(&self) -> Option<&str> {
        self.str_field(LEAD_AGENT_ID_KEY)
    }

    /// Session that currently owns the lead role
    pub fn lead_session_id(&self) -> Option<&str> {
        self.str_field(LEAD_SESSION_ID_KEY)
    }

    /// Team members, lead record included, in file order.
    pub fn members(&self) -> impl Iterator<Item = TeamMember<'_>> {
        self.member_values().iter().map(TeamMember::new)
    }

    pub fn member_count(&self) -> usize {
        self.member_values().len()
    }

    /// Replace `leadSessionId`, returning the previous string value if any.
    pub fn set_lead_session_id(&mut self, session_id: &str) -> Option<String> {
        self.document
            .insert(LEAD_SESSION_ID_KEY.to_string(), Value::from(session_id))
            .and_then(|previous| previous.as_str().map(str::to_string))
    }

    pub fn set_lead_agent_id(&mut self, agent_id: &str) {
        self.document.insert(LEAD_AGENT_ID_KEY.to_string(), Value::from(agent_id));
    }

    /// Set `isActive: false` on every member that is an object.
    ///
    /// Elements of other shapes are left as they are.
    pub fn mark_members_inactive(&mut self) {
        if let Some(Value::Array(members)) = self.document.get_mut(MEMBERS_KEY) {
            for member in members.iter_mut().filter_map(Value::as_object_mut) {
                member.insert(IS_ACTIVE_KEY.to_string(), Value::Bool(false));
            }
        }
    }

    fn member_values(&self) -> &[Value] {
        self.document
            .get(MEMBERS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.document.get(key).and_then(Value::as_str)
    }
}

/// Read-only view of one element of `members`.
///
/// Elements that are not objects, and fields of the wrong type, read as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember<'a> {
    value: &'a Value,
}

impl<'a> TeamMember<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw element.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.value.get(key).and_then(Value::as_str)
    }

    fn bool_field(&self, key: &str) -> Option<bool> {
        self.value.get(key).and_then(Value::as_bool)
    }

    /// Agent identifier (format: "{name}@{team_name}")
    pub fn agent_id(&self) -> Option<&'a str> {
        self.str_field("agentId")
    }

    /// Agent instance name; [`TEAM_LEAD_NAME`] marks the lead
    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    /// Agent capability type (e.g., "general-purpose", "Explore", "Plan")
    pub fn agent_type(&self) -> Option<&'a str> {
        self.str_field("agentType")
    }

    pub fn model(&self) -> Option<&'a str> {
        self.str_field("model")
    }

    /// Spawn prompt (absent for the lead)
    pub fn prompt(&self) -> Option<&'a str> {
        self.str_field("prompt")
    }

    pub fn color(&self) -> Option<&'a str> {
        self.str_field("color")
    }

    pub fn cwd(&self) -> Option<&'a str> {
        self.str_field("cwd")
    }

    /// True for the lead's own record.
    pub fn is_lead(&self) -> bool {
        self.name() == Some(TEAM_LEAD_NAME)
    }

    /// `isActive`, defaulting to `false`.
    pub fn active(&self) -> bool {
        self.bool_field(IS_ACTIVE_KEY).unwrap_or(false)
    }

    /// `planModeRequired`, defaulting to `false`.
    pub fn plan_mode(&self) -> bool {
        self.bool_field("planModeRequired").unwrap_or(false)
    }

    /// True when a non-empty spawn prompt is recorded.
    pub fn has_prompt(&self) -> bool {
        self.prompt().is_some_and(|p| !p.is_empty())
    }
}
