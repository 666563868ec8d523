//! Directive model and batch planning.
//!
//! A directive is a single fire-and-forget instruction for the external
//! directive tool: a subject (username), a kind token, and one argument.
//! Directives are not retained or retried after issuance; the external
//! tool owns their lifecycle.

use crate::batch::Batch;
use serde::{Deserialize, Serialize};

/// The directive kinds understood by the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectiveKind {
    /// Instruct the device to download one prompt file.
    DownloadPrompts,
    /// Toggle the device's tutorial mode.
    SetTutorialMode,
}

impl DirectiveKind {
    /// The literal token passed on the tool command line.
    pub fn token(&self) -> &'static str {
        match self {
            DirectiveKind::DownloadPrompts => "downloadPrompts",
            DirectiveKind::SetTutorialMode => "setTutorialMode",
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One directive for the external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Username the directive is scoped to.
    pub subject: String,

    /// The directive kind.
    pub kind: DirectiveKind,

    /// The single argument: a prompt file path or a boolean token.
    pub argument: String,
}

impl Directive {
    /// A directive to download one prompt file.
    pub fn download_prompts(subject: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            kind: DirectiveKind::DownloadPrompts,
            argument: resource.into(),
        }
    }

    /// A directive to toggle tutorial mode.
    pub fn set_tutorial_mode(subject: impl Into<String>, enabled: bool) -> Self {
        Self {
            subject: subject.into(),
            kind: DirectiveKind::SetTutorialMode,
            argument: if enabled { "true" } else { "false" }.to_string(),
        }
    }

    /// Arguments in tool invocation order: subject, kind token, argument.
    pub fn to_args(&self) -> [&str; 3] {
        [&self.subject, self.kind.token(), &self.argument]
    }
}

/// Build the ordered directive sequence for a batch.
///
/// The first prompt download is followed by exactly one directive turning
/// tutorial mode off, then the remaining downloads in manifest order. For
/// N prompt files this yields N+1 directives. The batch is validated
/// non-empty at load time.
pub fn plan_batch(batch: &Batch) -> Vec<Directive> {
    let mut directives = Vec::with_capacity(batch.prompts.len() + 1);

    directives.push(Directive::download_prompts(&batch.user, &batch.prompts[0]));
    directives.push(Directive::set_tutorial_mode(&batch.user, false));

    for resource in &batch.prompts[1..] {
        directives.push(Directive::download_prompts(&batch.user, resource));
    }

    directives
}
