//! Batch manifest model.
//!
//! A manifest is a YAML file pairing a subject identifier (`user`) with an
//! ordered list of prompt resource identifiers (`prompts`). It supports
//! forward-compatible parsing (unknown fields are ignored) and validation
//! of the loaded values.
//!
//! ```yaml
//! user: w017
//! prompts:
//!   - prompts/2024-03-08T14-22-31_s001.json
//!   - prompts/2024-03-08T15-10-02_s002.json
//! ```

use crate::error::{DispatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A batch of prompt files to dispatch for one user.
///
/// The prompt list order is the dispatch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Username the directives are scoped to.
    pub user: String,

    /// Ordered prompt file paths.
    pub prompts: Vec<String>,
}

impl Batch {
    /// Load and validate a batch manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DispatchError::UserError(format!(
                "failed to read manifest '{}': {}\n\
                 Fix: check the path exists and is readable.",
                path.display(),
                e
            ))
        })?;

        let batch: Batch = serde_yaml::from_str(&raw).map_err(|e| {
            DispatchError::ManifestError(format!(
                "failed to parse manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        batch.validate()?;
        Ok(batch)
    }

    /// Reject manifests the dispatcher cannot act on.
    ///
    /// The dispatcher unconditionally issues a directive for the first
    /// prompt file, so an empty list is caught here rather than at
    /// dispatch time.
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(DispatchError::ManifestError(
                "'user' must not be empty".to_string(),
            ));
        }
        if self.prompts.is_empty() {
            return Err(DispatchError::ManifestError(
                "'prompts' must contain at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}
