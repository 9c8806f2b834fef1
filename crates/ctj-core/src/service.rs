//! Team operations: list, join and member inspection.
//!
//! [`TeamService`] holds no state besides its two collaborators; every call
//! re-reads the disk. Results are plain serializable structs so the transport
//! layer only has to render them.

use crate::error::TeamOpError;
use crate::paths::Paths;
use crate::schema::{TeamConfig, TeamMember};
use crate::session::SessionDirectory;
use crate::store::{TeamLookup, TeamStore};
use crate::time::format_created_at;
use serde::Serialize;
use std::path::PathBuf;

/// Description rendered for teams that have none.
pub const NO_DESCRIPTION: &str = "(no description)";

/// Freshness of a team's lead session relative to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSessionStatus {
    /// The lead session is the caller's own session.
    Current,
    /// Another session that is still alive owns the team.
    ActiveOther,
    /// The lead session is gone or idle; the team can be rejoined.
    Stale,
}

/// Outcome of [`TeamService::list_teams`].
#[derive(Debug, Clone, PartialEq)]
pub enum TeamListing {
    /// The teams root has no team directories at all.
    NoTeams { teams_dir: PathBuf },
    /// One summary per readable team; may be empty if every config was bad.
    Teams(Vec<TeamSummary>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team_name: String,
    pub description: String,
    pub created_at: String,
    pub member_count: usize,
    pub members: Vec<MemberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_session_id: Option<String>,
    pub lead_session_status: LeadSessionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
    Joined,
}

/// Outcome of a successful [`TeamService::join_team`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOutcome {
    pub status: JoinStatus,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_session_id: Option<String>,
    pub new_session_id: String,
    pub members_reset_to_inactive: usize,
    pub teammates_ready_to_respawn: Vec<RespawnCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespawnCandidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub has_prompt: bool,
}

/// Outcome of [`TeamService::team_members`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembers {
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub teammates: Vec<TeammateSpec>,
}

/// Everything needed to spawn a teammate again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub plan_mode_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_agent_id: Option<String>,
}

impl From<TeamMember<'_>> for TeammateSpec {
    fn from(m: TeamMember<'_>) -> Self {
        Self {
            name: m.name().map(str::to_string),
            agent_type: m.agent_type().map(str::to_string),
            model: m.model().map(str::to_string),
            prompt: m.prompt().map(str::to_string),
            color: m.color().map(str::to_string),
            plan_mode_required: m.plan_mode(),
            cwd: m.cwd().map(str::to_string),
            previous_agent_id: m.agent_id().map(str::to_string),
        }
    }
}

/// Lead agent id written on join.
pub fn lead_agent_id(team: &str) -> String {
    format!("team-lead@{team}")
}

/// The list / join / members operations.
#[derive(Debug, Clone)]
pub struct TeamService {
    store: TeamStore,
    sessions: SessionDirectory,
}

impl TeamService {
    pub fn new(store: TeamStore, sessions: SessionDirectory) -> Self {
        Self { store, sessions }
    }

    pub fn from_paths(paths: &Paths) -> Self {
        Self::new(
            TeamStore::new(&paths.teams_dir),
            SessionDirectory::new(&paths.session_env_dir),
        )
    }

    pub fn store(&self) -> &TeamStore {
        &self.store
    }

    pub fn sessions(&self) -> &SessionDirectory {
        &self.sessions
    }

    /// Summarize every readable team. Unreadable teams are skipped.
    pub fn list_teams(&self) -> TeamListing {
        let names = self.store.list_team_names();
        if names.is_empty() {
            return TeamListing::NoTeams {
                teams_dir: self.store.teams_dir().to_path_buf(),
            };
        }

        let current = self.sessions.current_session_id();
        let summaries = names
            .into_iter()
            .filter_map(|name| match self.store.read_team_config(&name) {
                TeamLookup::Found(config) => {
                    Some(self.summarize(name, &config, current.as_deref()))
                }
                TeamLookup::Absent(reason) => {
                    tracing::debug!(team = %name, ?reason, "skipping team");
                    None
                }
            })
            .collect();

        TeamListing::Teams(summaries)
    }

    /// Classify a lead session against the caller's current session.
    pub fn lead_session_status(
        &self,
        lead_session_id: Option<&str>,
        current_session_id: Option<&str>,
    ) -> LeadSessionStatus {
        match lead_session_id {
            Some(lead) if Some(lead) == current_session_id => LeadSessionStatus::Current,
            Some(lead) if self.sessions.is_session_active(lead) => LeadSessionStatus::ActiveOther,
            _ => LeadSessionStatus::Stale,
        }
    }

    fn summarize(
        &self,
        team_name: String,
        config: &TeamConfig,
        current: Option<&str>,
    ) -> TeamSummary {
        let lead_session_status = self.lead_session_status(config.lead_session_id(), current);
        let members = config
            .members()
            .map(|m| MemberStatus {
                name: m.name().map(str::to_string),
                role: m.agent_type().map(str::to_string),
                is_active: m.active(),
            })
            .collect();

        TeamSummary {
            team_name,
            description: config.description().unwrap_or(NO_DESCRIPTION).to_string(),
            created_at: format_created_at(config.created_at_ms()),
            member_count: config.member_count(),
            members,
            lead_session_id: config.lead_session_id().map(str::to_string),
            lead_session_status,
        }
    }

    /// Make the current session the lead of `team_name`.
    ///
    /// Every member object, the lead record included, is marked inactive
    /// because its process belonged to the old session and must be respawned.
    /// Elements of `members` that are not objects are written back unchanged
    /// but still counted in `members_reset_to_inactive`.
    ///
    /// # Errors
    ///
    /// - [`TeamOpError::NotFound`] when the config is absent
    /// - [`TeamOpError::NoCurrentSession`] when no session marker exists;
    ///   nothing is written
    /// - [`TeamOpError::WriteFailed`] when persisting fails; the file on disk
    ///   is unchanged
    pub fn join_team(&self, team_name: &str) -> Result<JoinOutcome, TeamOpError> {
        let mut config = self
            .store
            .read_team_config(team_name)
            .found()
            .ok_or_else(|| TeamOpError::NotFound {
                team: team_name.to_string(),
            })?;

        let current = self
            .sessions
            .current_session_id()
            .ok_or_else(|| TeamOpError::NoCurrentSession {
                session_env_dir: self.sessions.root().to_path_buf(),
            })?;

        let previous_session_id = config.set_lead_session_id(&current);
        config.set_lead_agent_id(&lead_agent_id(team_name));
        config.mark_members_inactive();

        self.store
            .write_team_config(team_name, &config)
            .map_err(|source| TeamOpError::WriteFailed { source })?;

        tracing::info!(
            team = team_name,
            previous = previous_session_id.as_deref().unwrap_or("<none>"),
            new = %current,
            "joined team as lead"
        );

        let teammates_ready_to_respawn = config
            .members()
            .filter(|m| !m.is_lead())
            .map(|m| RespawnCandidate {
                name: m.name().map(str::to_string),
                role: m.agent_type().map(str::to_string),
                has_prompt: m.has_prompt(),
            })
            .collect();

        Ok(JoinOutcome {
            status: JoinStatus::Joined,
            team_name: team_name.to_string(),
            description: config.description().map(str::to_string),
            previous_session_id,
            new_session_id: current,
            members_reset_to_inactive: config.member_count(),
            teammates_ready_to_respawn,
        })
    }

    /// Spawn definitions for every non-lead member. Read-only.
    ///
    /// # Errors
    ///
    /// [`TeamOpError::NotFound`] when the config is absent.
    pub fn team_members(&self, team_name: &str) -> Result<TeamMembers, TeamOpError> {
        let config = self
            .store
            .read_team_config(team_name)
            .found()
            .ok_or_else(|| TeamOpError::NotFound {
                team: team_name.to_string(),
            })?;

        let teammates = config
            .members()
            .filter(|m| !m.is_lead())
            .map(TeammateSpec::from)
            .collect();

        Ok(TeamMembers {
            team_name: team_name.to_string(),
            description: config.description().map(str::to_string),
            teammates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CONFIG_FILE_NAME;
    use serde_json::{Value, json};
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        paths: Paths,
        service: TeamService,
    }

    fn setup() -> Fixture {
        let temp = TempDir::new().unwrap();
        let paths = Paths::from_home(temp.path());
        fs::create_dir_all(&paths.teams_dir).unwrap();
        fs::create_dir_all(&paths.session_env_dir).unwrap();
        let service = TeamService::from_paths(&paths);
        Fixture {
            _temp: temp,
            paths,
            service,
        }
    }

    impl Fixture {
        fn team(&self, name: &str, config: &Value) {
            let dir = self.paths.teams_dir.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(
                dir.join(CONFIG_FILE_NAME),
                serde_json::to_string_pretty(config).unwrap(),
            )
            .unwrap();
        }

        fn session(&self, id: &str, age: Duration) {
            let dir = self.paths.session_env_dir.join(id);
            fs::create_dir_all(&dir).unwrap();
            fs::File::open(&dir)
                .unwrap()
                .set_modified(SystemTime::now() - age)
                .unwrap();
        }

        fn on_disk(&self, name: &str) -> Value {
            let raw =
                fs::read_to_string(self.paths.teams_dir.join(name).join(CONFIG_FILE_NAME)).unwrap();
            serde_json::from_str(&raw).unwrap()
        }
    }

    fn team_config(lead_session: &str) -> Value {
        json!({
            "name": "test-team",
            "createdAt": 1_700_000_000_000u64,
            "leadAgentId": "agent-123",
            "leadSessionId": lead_session,
            "members": [
                {
                    "agentId": "agent-123",
                    "name": "team-lead",
                    "agentType": "general-purpose",
                    "joinedAt": 1_700_000_000_000u64,
                    "isActive": true
                },
                {
                    "agentId": "agent-456",
                    "name": "researcher",
                    "agentType": "Explore",
                    "joinedAt": 1_700_000_001_000u64,
                    "prompt": "Research the codebase",
                    "model": "sonnet",
                    "color": "blue",
                    "cwd": "/tmp",
                    "isActive": true
                }
            ]
        })
    }

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_list_no_teams() {
        let fx = setup();
        assert_eq!(
            fx.service.list_teams(),
            TeamListing::NoTeams {
                teams_dir: fx.paths.teams_dir.clone()
            }
        );
    }

    #[test]
    fn test_list_skips_bad_team() {
        let fx = setup();
        fx.team("good", &team_config("session-abc"));
        let bad = fx.paths.teams_dir.join("bad");
        fs::create_dir_all(&bad).unwrap();
        fs::write(bad.join(CONFIG_FILE_NAME), "{not json").unwrap();

        let TeamListing::Teams(teams) = fx.service.list_teams() else {
            panic!("expected teams");
        };
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_name, "good");
    }

    #[test]
    fn test_list_only_bad_teams_is_empty_list() {
        let fx = setup();
        fs::create_dir_all(fx.paths.teams_dir.join("empty-dir")).unwrap();
        assert_eq!(fx.service.list_teams(), TeamListing::Teams(Vec::new()));
    }

    #[test]
    fn test_list_summary_fields() {
        let fx = setup();
        let mut config = team_config("session-abc");
        config["members"][1]["isActive"] = json!(false);
        fx.team("alpha", &config);

        let TeamListing::Teams(teams) = fx.service.list_teams() else {
            panic!("expected teams");
        };
        let summary = &teams[0];
        assert_eq!(summary.description, NO_DESCRIPTION);
        assert_eq!(summary.created_at, "2023-11-14 22:13:20 UTC");
        assert_eq!(summary.member_count, 2);
        assert_eq!(summary.members[0].name.as_deref(), Some("team-lead"));
        assert_eq!(summary.members[1].role.as_deref(), Some("Explore"));
        assert!(summary.members[0].is_active);
        assert!(!summary.members[1].is_active);
        assert_eq!(summary.lead_session_id.as_deref(), Some("session-abc"));
        assert_eq!(summary.lead_session_status, LeadSessionStatus::Stale);
    }

    #[test]
    fn test_list_session_statuses() {
        let fx = setup();
        fx.session("old", 10 * MINUTE);
        fx.session("other", 2 * MINUTE);
        fx.session("mine", Duration::ZERO);
        fx.team("t-current", &team_config("mine"));
        fx.team("t-other", &team_config("other"));
        fx.team("t-stale", &team_config("old"));
        fx.team("t-gone", &team_config("never-existed"));

        let TeamListing::Teams(teams) = fx.service.list_teams() else {
            panic!("expected teams");
        };
        let status_of = |name: &str| {
            teams
                .iter()
                .find(|t| t.team_name == name)
                .map(|t| t.lead_session_status)
                .unwrap()
        };
        assert_eq!(status_of("t-current"), LeadSessionStatus::Current);
        assert_eq!(status_of("t-other"), LeadSessionStatus::ActiveOther);
        assert_eq!(status_of("t-stale"), LeadSessionStatus::Stale);
        assert_eq!(status_of("t-gone"), LeadSessionStatus::Stale);
    }

    #[test]
    fn test_missing_lead_session_is_stale() {
        let fx = setup();
        fx.session("mine", Duration::ZERO);
        assert_eq!(
            fx.service.lead_session_status(None, Some("mine")),
            LeadSessionStatus::Stale
        );
        assert_eq!(
            fx.service.lead_session_status(None, None),
            LeadSessionStatus::Stale
        );
    }

    #[test]
    fn test_join_updates_config() {
        let fx = setup();
        fx.team("alpha", &team_config("session-abc"));
        fx.session("new-session", Duration::ZERO);

        let outcome = fx.service.join_team("alpha").unwrap();
        assert_eq!(outcome.status, JoinStatus::Joined);
        assert_eq!(outcome.previous_session_id.as_deref(), Some("session-abc"));
        assert_eq!(outcome.new_session_id, "new-session");
        assert_eq!(outcome.members_reset_to_inactive, 2);
        assert_eq!(
            outcome.teammates_ready_to_respawn,
            vec![RespawnCandidate {
                name: Some("researcher".to_string()),
                role: Some("Explore".to_string()),
                has_prompt: true,
            }]
        );

        let disk = fx.on_disk("alpha");
        assert_eq!(disk["leadSessionId"], "new-session");
        assert_eq!(disk["leadAgentId"], "team-lead@alpha");
        for member in disk["members"].as_array().unwrap() {
            assert_eq!(member["isActive"], false);
        }
        // Untouched fields survive
        assert_eq!(disk["members"][1]["prompt"], "Research the codebase");
        assert_eq!(disk["createdAt"], 1_700_000_000_000u64);
    }

    #[test]
    fn test_join_not_found() {
        let fx = setup();
        fx.session("s", Duration::ZERO);
        let err = fx.service.join_team("ghost").unwrap_err();
        assert!(matches!(err, TeamOpError::NotFound { ref team } if team == "ghost"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_join_without_session_leaves_disk_alone() {
        let fx = setup();
        fx.team("alpha", &team_config("session-abc"));
        let before = fx.on_disk("alpha");

        let err = fx.service.join_team("alpha").unwrap_err();
        assert!(matches!(err, TeamOpError::NoCurrentSession { .. }));
        assert!(err.to_string().contains("Could not detect"));
        assert_eq!(fx.on_disk("alpha"), before);
    }

    #[cfg(unix)]
    #[test]
    fn test_join_write_failure_leaves_disk_alone() {
        use std::os::unix::fs::PermissionsExt;

        let fx = setup();
        fx.team("alpha", &team_config("session-abc"));
        fx.session("new-session", Duration::ZERO);
        let before = fx.on_disk("alpha");

        let dir = fx.paths.teams_dir.join("alpha");
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();
        // Privileged users ignore directory permissions; nothing to assert then
        let check = dir.join(".write-check");
        let writable = fs::write(&check, "x").is_ok();
        let _ = fs::remove_file(&check);

        let result = fx.service.join_team("alpha");
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

        if writable {
            return;
        }
        let err = result.unwrap_err();
        assert!(matches!(err, TeamOpError::WriteFailed { .. }));
        assert!(err.to_string().contains("Failed to write"));
        assert_eq!(fx.on_disk("alpha"), before);
    }

    #[test]
    fn test_join_sparse_members() {
        let fx = setup();
        fx.team("sparse", &json!({"members": [{}, {"name": "team-lead"}]}));
        fx.session("s", Duration::ZERO);

        let outcome = fx.service.join_team("sparse").unwrap();
        assert_eq!(outcome.previous_session_id, None);
        assert_eq!(outcome.members_reset_to_inactive, 2);
        assert_eq!(outcome.teammates_ready_to_respawn.len(), 1);
        assert!(!outcome.teammates_ready_to_respawn[0].has_prompt);

        let disk = fx.on_disk("sparse");
        assert_eq!(disk["members"][0], json!({"isActive": false}));
    }

    #[test]
    fn test_odd_member_shapes_are_listed_and_joined() {
        let fx = setup();
        fx.team("numbers", &json!({"members": [42]}));
        fx.team("nulls", &json!({"members": [null]}));
        fx.team("numeric-name", &json!({"members": [{"name": 7}]}));
        fx.team("fractional", &json!({"createdAt": 1_700_000_000_000.5, "members": []}));
        fx.team("numeric-lead", &json!({"leadSessionId": 123, "members": []}));
        fx.session("s", Duration::ZERO);

        let TeamListing::Teams(teams) = fx.service.list_teams() else {
            panic!("expected teams");
        };
        assert_eq!(teams.len(), 5);
        let summary_of = |name: &str| teams.iter().find(|t| t.team_name == name).unwrap();
        assert_eq!(summary_of("numbers").member_count, 1);
        assert_eq!(summary_of("numbers").members[0].name, None);
        assert_eq!(summary_of("fractional").created_at, "2023-11-14 22:13:20 UTC");
        assert_eq!(summary_of("numeric-lead").lead_session_id, None);
        assert_eq!(summary_of("numeric-lead").lead_session_status, LeadSessionStatus::Stale);

        let members = fx.service.team_members("numeric-name").unwrap();
        assert_eq!(members.teammates.len(), 1);
        assert_eq!(members.teammates[0].name, None);

        let outcome = fx.service.join_team("nulls").unwrap();
        assert_eq!(outcome.members_reset_to_inactive, 1);
        assert_eq!(fx.on_disk("nulls")["members"], json!([null]));

        let outcome = fx.service.join_team("numeric-lead").unwrap();
        assert_eq!(outcome.previous_session_id, None);
        assert_eq!(fx.on_disk("numeric-lead")["leadSessionId"], "s");
    }

    #[test]
    fn test_join_keeps_null_fields_and_key_order() {
        let fx = setup();
        let before = json!({
            "leadSessionId": "old",
            "members": [{"name": "x", "model": null, "cwd": null}]
        });
        fx.team("alpha", &before);
        fx.session("s", Duration::ZERO);
        fx.service.join_team("alpha").unwrap();

        let raw = fs::read_to_string(fx.paths.teams_dir.join("alpha").join(CONFIG_FILE_NAME))
            .unwrap();
        let mut after: Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&String> = after.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["leadSessionId", "members", "leadAgentId"]);
        let member_keys: Vec<&String> = after["members"][0].as_object().unwrap().keys().collect();
        assert_eq!(member_keys, ["name", "model", "cwd", "isActive"]);

        let doc = after.as_object_mut().unwrap();
        assert_eq!(doc.shift_remove("leadSessionId"), Some(json!("s")));
        assert_eq!(doc.shift_remove("leadAgentId"), Some(json!("team-lead@alpha")));
        let member = doc["members"][0].as_object_mut().unwrap();
        assert_eq!(member.shift_remove("isActive"), Some(json!(false)));

        let mut expected = before;
        expected.as_object_mut().unwrap().shift_remove("leadSessionId");
        assert_eq!(after, expected);
    }

    #[test]
    fn test_team_members_projection() {
        let fx = setup();
        let mut config = team_config("session-abc");
        config["description"] = json!("a team");
        config["members"][1]["planModeRequired"] = json!(true);
        let writer = json!({"agentId": "agent-789", "name": "writer", "agentType": "general-purpose"});
        config["members"].as_array_mut().unwrap().push(writer);
        fx.team("alpha", &config);

        let members = fx.service.team_members("alpha").unwrap();
        assert_eq!(members.team_name, "alpha");
        assert_eq!(members.description.as_deref(), Some("a team"));
        assert_eq!(members.teammates.len(), 2);

        let researcher = &members.teammates[0];
        assert_eq!(researcher.name.as_deref(), Some("researcher"));
        assert_eq!(researcher.model.as_deref(), Some("sonnet"));
        assert_eq!(researcher.color.as_deref(), Some("blue"));
        assert_eq!(researcher.cwd.as_deref(), Some("/tmp"));
        assert!(researcher.plan_mode_required);
        assert_eq!(researcher.previous_agent_id.as_deref(), Some("agent-456"));

        let writer = &members.teammates[1];
        assert!(!writer.plan_mode_required);
        let rendered = serde_json::to_value(writer).unwrap();
        assert_eq!(rendered["planModeRequired"], false);
        assert!(rendered.get("model").is_none());
    }

    #[test]
    fn test_team_members_not_found() {
        let fx = setup();
        assert!(matches!(
            fx.service.team_members("../teams").unwrap_err(),
            TeamOpError::NotFound { .. }
        ));
    }

    #[test]
    fn test_lead_session_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(LeadSessionStatus::ActiveOther).unwrap(),
            "active-other"
        );
        assert_eq!(serde_json::to_value(LeadSessionStatus::Current).unwrap(), "current");
        assert_eq!(serde_json::to_value(LeadSessionStatus::Stale).unwrap(), "stale");
    }
}
