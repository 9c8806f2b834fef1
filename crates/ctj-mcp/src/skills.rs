//! Skill documents installed next to the MCP server.
//!
//! Each skill is a static Markdown file with YAML frontmatter, written to
//! `<skills_dir>/<name>/SKILL.md`. They let a session perform the rejoin flow
//! by hand even when the MCP server is not connected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the file written inside each skill directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// A bundled skill document.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub dir_name: &'static str,
    pub content: &'static str,
}

pub const SKILLS: [Skill; 3] = [
    Skill {
        dir_name: "team-join",
        content: TEAM_JOIN_SKILL,
    },
    Skill {
        dir_name: "team-list",
        content: TEAM_LIST_SKILL,
    },
    Skill {
        dir_name: "team-members",
        content: TEAM_MEMBERS_SKILL,
    },
];

const TEAM_JOIN_SKILL: &str = r#"---
name: team-join
description: Take over an orphaned Claude Code agent team as its lead. Use when the user asks to "rejoin", "join", "reconnect" or "resume" a team, or to become lead of an existing team.
allowed-tools: Read, Write, Bash, Glob
---

# Rejoin an orphaned team

A team is orphaned when the session that created it has ended. Rejoining points
the team at this session and marks every member inactive.

## 1. Pick the team

Use the team the user named. Otherwise list candidates:

```bash
ls ~/.claude/teams/
```

Ask the user to choose when there is more than one. Stop if there are none.

## 2. Load the config

Read `~/.claude/teams/<team>/config.json`. Stop and tell the user if it is
missing or unreadable.

## 3. Find this session's id

```bash
ls -t ~/.claude/session-env/ | head -1
```

The newest entry under `session-env` is the current session. Stop if the
directory is empty.

## 4. Rewrite the config

- set `leadSessionId` to the session id from step 3
- set `leadAgentId` to `team-lead@<team>`
- set `isActive` to `false` on every entry of `members`

Keep every other field as it is and write the file back with 4-space
indentation.

## 5. Report

Say the team was rejoined and how many members were reset. List each member
other than `team-lead` with its `agentType`, then offer to re-spawn them (see the
team-members skill).
"#;

const TEAM_LIST_SKILL: &str = r#"---
name: team-list
description: Show every Claude Code agent team and whether its lead session is current, active elsewhere, or stale. Use when the user asks to "list teams", "show teams" or find "orphaned teams".
allowed-tools: Read, Bash, Glob
---

# List agent teams

## 1. Find teams

```bash
ls ~/.claude/teams/
```

No directory or no entries means there are no teams.

## 2. Read configs

Read `~/.claude/teams/<team>/config.json` for each team. Skip teams whose
config is missing or cannot be parsed.

## 3. Classify the lead session

Take `leadSessionId` from the config and look at the modification time of
`~/.claude/session-env/<leadSessionId>/`. The current session is the newest
entry of `~/.claude/session-env/`.

- **current**: `leadSessionId` is the current session
- **active-other**: another session, modified within the last 5 minutes
- **stale**: anything else, including a missing session directory

## 4. Present

For each team show its name, description (or "no description"), creation
time from `createdAt`, members with their `agentType`, and the lead status.
Point out stale teams as candidates for rejoining.
"#;

const TEAM_MEMBERS_SKILL: &str = r#"---
name: team-members
description: Read the spawn settings of a team's teammates so they can be re-spawned. Use when the user asks for "team members", "show teammates" or to "re-spawn" or "respawn" agents.
allowed-tools: Read, Bash, Glob
---

# Teammate definitions

## 1. Pick the team

Use the team the user named, otherwise list `~/.claude/teams/` and ask.

## 2. Read the config

Read `~/.claude/teams/<team>/config.json`. Stop if it is missing or unreadable.

## 3. Collect teammates

Skip the member named `team-lead`; that entry is the lead itself. For every
other member report `name`, `agentType`, `model`, `prompt`, `cwd` and
`planModeRequired` (false when absent).

## 4. Offer to re-spawn

If the user agrees, re-spawn each teammate with the Task tool using its saved
settings:

```
name:          <name>
subagent_type: <agentType>
model:         <model>
prompt:        <prompt>
team_name:     <team>
mode:          "plan" when planModeRequired is true
```

Issue the Task calls together in one message so teammates start in parallel.
"#;

/// Write every bundled skill beneath `skills_dir`, overwriting older copies.
///
/// Returns the paths of the written files.
///
/// # Errors
///
/// Returns an I/O error if a directory or file cannot be written.
pub fn install_skills(skills_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SKILLS.len());
    for skill in &SKILLS {
        let dir = skills_dir.join(skill.dir_name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(SKILL_FILE_NAME);
        fs::write(&path, skill.content)?;
        tracing::debug!(path = %path.display(), "installed skill");
        written.push(path);
    }
    Ok(written)
}

/// Remove the bundled skill directories beneath `skills_dir`.
///
/// Other entries of `skills_dir` are left alone. Returns the names of the
/// skills that were actually present.
///
/// # Errors
///
/// Returns an I/O error if an existing skill directory cannot be removed.
pub fn uninstall_skills(skills_dir: &Path) -> io::Result<Vec<&'static str>> {
    let mut removed = Vec::new();
    for skill in &SKILLS {
        let dir = skills_dir.join(skill.dir_name);
        match fs::remove_dir_all(&dir) {
            Ok(()) => removed.push(skill.dir_name),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(removed)
}
