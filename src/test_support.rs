use crate::batch::Batch;
use crate::directive::Directive;
use crate::error::{DispatchError, Result};
use crate::tool::{DirectiveTool, IssueOutcome};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Fake directive tool that records every directive it is asked to issue.
pub(crate) struct RecordingTool {
    pub(crate) issued: RefCell<Vec<Directive>>,
    /// Exit codes handed out in invocation order; missing entries are 0.
    exit_codes: Vec<i32>,
    /// Invocation indices at which `issue` fails as if the tool binary
    /// were missing.
    spawn_failures: Vec<usize>,
}

impl RecordingTool {
    pub(crate) fn new() -> Self {
        Self {
            issued: RefCell::new(Vec::new()),
            exit_codes: Vec::new(),
            spawn_failures: Vec::new(),
        }
    }

    pub(crate) fn with_exit_codes(exit_codes: Vec<i32>) -> Self {
        Self {
            exit_codes,
            ..Self::new()
        }
    }

    pub(crate) fn with_spawn_failure(index: usize) -> Self {
        Self {
            spawn_failures: vec![index],
            ..Self::new()
        }
    }
}

impl DirectiveTool for RecordingTool {
    fn issue(&self, directive: &Directive) -> Result<IssueOutcome> {
        let index = self.issued.borrow().len();
        self.issued.borrow_mut().push(directive.clone());

        if self.spawn_failures.contains(&index) {
            return Err(DispatchError::UserError(
                "failed to execute directive tool 'fake': not found".to_string(),
            ));
        }

        let code = self.exit_codes.get(index).copied().unwrap_or(0);
        Ok(IssueOutcome {
            exit_code: Some(code),
        })
    }
}

/// Build a batch without going through a manifest file.
pub(crate) fn batch(user: &str, prompts: &[&str]) -> Batch {
    Batch {
        user: user.to_string(),
        prompts: prompts.iter().map(|p| p.to_string()).collect(),
    }
}

/// Write a manifest file into `dir` and return its path.
pub(crate) fn write_manifest(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("batch.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

/// Write a shell script into `dir` and return its path. Scripts are run
/// via `sh <path>`, so no executable bit is needed.
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}
