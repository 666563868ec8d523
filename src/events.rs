//! Issuance logging.
//!
//! Dispatch is fire-and-forget, so the only durable trace of a run is the
//! optional issuance log: an append-only NDJSON file (one JSON object per
//! line) with one record per attempted invocation.
//!
//! # Record Format
//!
//! - `ts`: RFC3339 timestamp
//! - `actor`: the operator string (e.g., `user@HOST`)
//! - `subject`: the username the directive is scoped to
//! - `kind`: `downloadPrompts` or `setTutorialMode`
//! - `argument`: the prompt file path or boolean token
//! - `exit_code`: the tool's exit code (absent if the tool never spawned
//!   or was terminated by a signal)
//! - `ok`: whether the invocation exited cleanly

use crate::directive::{Directive, DirectiveKind};
use crate::error::{DispatchError, Result};
use crate::tool::IssueOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// One line of the issuance log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// RFC3339 timestamp when the invocation finished.
    pub ts: DateTime<Utc>,

    /// The operator who ran the dispatch (e.g., `user@HOST`).
    pub actor: String,

    /// Username the directive was scoped to.
    pub subject: String,

    /// The directive kind.
    pub kind: DirectiveKind,

    /// The directive argument.
    pub argument: String,

    /// Exit code of the tool process, if it ran to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,

    /// Whether the invocation exited cleanly.
    pub ok: bool,
}

impl IssueRecord {
    /// Create a record for one attempted invocation.
    ///
    /// `outcome` is `None` when the tool could not be spawned at all.
    pub fn new(directive: &Directive, outcome: Option<IssueOutcome>) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor_string(),
            subject: directive.subject.clone(),
            kind: directive.kind,
            argument: directive.argument.clone(),
            exit_code: outcome.and_then(|o| o.exit_code),
            ok: outcome.map(|o| o.is_success()).unwrap_or(false),
        }
    }

    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            DispatchError::UserError(format!("failed to serialize issue record to JSON: {}", e))
        })
    }
}

/// Get the actor string for record metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append-only NDJSON issuance log.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Create a log handle for the given path. The file is created on
    /// first append.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one record as a single JSON line with a trailing newline.
    pub fn append(&self, record: &IssueRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DispatchError::UserError(format!(
                        "failed to create events directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let line = record.to_ndjson_line()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DispatchError::UserError(format!(
                    "failed to open events file '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line).map_err(|e| {
            DispatchError::UserError(format!(
                "failed to write to events file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
