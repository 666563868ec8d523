//! The dispatcher loop.
//!
//! Issues the planned directive sequence strictly in order, one invocation
//! at a time: each invocation runs to completion before the next starts.
//! The default policy mirrors the original collection runs: keep going
//! past failures and always print the completion line. Aborting on the
//! first failure is an explicit opt-in.

use crate::batch::Batch;
use crate::directive::{Directive, DirectiveKind, plan_batch};
use crate::error::{DispatchError, Result};
use crate::events::{EventLog, IssueRecord};
use crate::tool::DirectiveTool;

/// What to do when an invocation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Proceed to the next directive regardless of exit status (default).
    #[default]
    Continue,
    /// Stop at the first failed or unspawnable invocation.
    Abort,
}

/// Counts for one dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Invocations attempted, including ones that failed to spawn.
    pub attempted: usize,

    /// Invocations that did not exit cleanly.
    pub failures: usize,
}

/// Dispatch one batch through the given tool.
///
/// Prints a progress line before each invocation and, under the default
/// policy, a completion line after the loop regardless of failures. Under
/// `FailurePolicy::Abort` the first failure is returned as an error and
/// nothing further is attempted.
pub fn dispatch_batch(
    batch: &Batch,
    tool: &dyn DirectiveTool,
    policy: FailurePolicy,
    log: Option<&EventLog>,
) -> Result<DispatchSummary> {
    let directives = plan_batch(batch);
    let mut summary = DispatchSummary {
        attempted: 0,
        failures: 0,
    };

    for directive in &directives {
        announce(directive);
        summary.attempted += 1;

        match tool.issue(directive) {
            Ok(outcome) => {
                if let Some(log) = log {
                    log.append(&IssueRecord::new(directive, Some(outcome)))?;
                }

                if !outcome.is_success() {
                    summary.failures += 1;
                    if policy == FailurePolicy::Abort {
                        return Err(DispatchError::ToolError(format!(
                            "{} {} exited with {}",
                            directive.kind,
                            directive.argument,
                            describe_exit(outcome.exit_code)
                        )));
                    }
                }
            }
            Err(err) => {
                if let Some(log) = log {
                    log.append(&IssueRecord::new(directive, None))?;
                }

                summary.failures += 1;
                if policy == FailurePolicy::Abort {
                    return Err(err);
                }
                eprintln!("Warning: {}", err);
            }
        }
    }

    println!(
        "Batch complete for {}: {} directives issued ({} failed)",
        batch.user, summary.attempted, summary.failures
    );

    Ok(summary)
}

fn announce(directive: &Directive) {
    match directive.kind {
        DirectiveKind::DownloadPrompts => println!(
            "Downloading prompts for {}: {}",
            directive.subject, directive.argument
        ),
        DirectiveKind::SetTutorialMode => println!(
            "Setting tutorial mode for {}: {}",
            directive.subject, directive.argument
        ),
    }
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}
