//! Error types for the promptq CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptq operations.
///
/// Each variant maps to a distinct process exit code.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// User provided invalid arguments or a path that cannot be used.
    #[error("{0}")]
    UserError(String),

    /// The batch manifest could not be parsed or failed validation.
    #[error("Manifest error: {0}")]
    ManifestError(String),

    /// A directive invocation failed while --abort-on-error was set.
    #[error("Directive tool failed: {0}")]
    ToolError(String),
}

impl DispatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::UserError(_) => exit_codes::USER_ERROR,
            DispatchError::ManifestError(_) => exit_codes::MANIFEST_FAILURE,
            DispatchError::ToolError(_) => exit_codes::TOOL_FAILURE,
        }
    }
}

/// Result type alias for promptq operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
