//! Exit code constants for the promptq CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable paths, missing tool)
//! - 2: Manifest failure (parse error or validation error)
//! - 3: Tool failure (a directive invocation failed under --abort-on-error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable manifest path, or missing tool binary.
pub const USER_ERROR: i32 = 1;

/// Manifest failure: the batch manifest could not be parsed or failed validation.
pub const MANIFEST_FAILURE: i32 = 2;

/// Tool failure: a directive invocation failed and --abort-on-error was set.
pub const TOOL_FAILURE: i32 = 3;
