//! The external directive tool collaborator.
//!
//! The dispatcher talks to the directive-creation tool through the
//! `DirectiveTool` trait so it can be exercised with a fake in tests. The
//! production implementation spawns the configured command once per
//! directive, waits for it to exit, and leaves its stdio untouched so the
//! tool's own output reaches the console unmodified.

use crate::directive::Directive;
use crate::error::{DispatchError, Result};
use std::process::Command;

/// External program invoked when `--tool` is not given.
pub const DEFAULT_TOOL: &str = "create_directive";

/// Result of one directive invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueOutcome {
    /// Exit code of the tool process (None if terminated by a signal).
    pub exit_code: Option<i32>,
}

impl IssueOutcome {
    /// Check if the invocation exited cleanly.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A collaborator that can issue directives.
pub trait DirectiveTool {
    /// Issue one directive and wait for the invocation to finish.
    ///
    /// `Err` means the invocation could not be attempted at all (e.g. the
    /// tool binary is missing); a nonzero exit is reported through the
    /// outcome, not as an error.
    fn issue(&self, directive: &Directive) -> Result<IssueOutcome>;
}

/// Spawns the external tool as
/// `<program> [leading args..] <subject> <kind> <argument>`.
#[derive(Debug, Clone)]
pub struct CommandTool {
    program: String,
    leading_args: Vec<String>,
}

impl CommandTool {
    /// Parse a tool command line, e.g. `create_directive` or
    /// `ssh collector create_directive`.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let words = shell_words::split(command).map_err(|e| {
            DispatchError::UserError(format!(
                "failed to parse tool command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command, e
            ))
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| {
            DispatchError::UserError(format!(
                "tool command is empty after parsing: '{}'",
                command
            ))
        })?;

        Ok(Self {
            program,
            leading_args: words.collect(),
        })
    }
}

impl DirectiveTool for CommandTool {
    fn issue(&self, directive: &Directive) -> Result<IssueOutcome> {
        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .args(directive.to_args())
            .status()
            .map_err(|e| {
                DispatchError::UserError(format!(
                    "failed to execute directive tool '{}': {}\n\
                     Fix: ensure the tool is installed and in PATH.",
                    self.program, e
                ))
            })?;

        Ok(IssueOutcome {
            exit_code: status.code(),
        })
    }
}
