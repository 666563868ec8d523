//! CLI argument parsing for promptq.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::tool::DEFAULT_TOOL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptq: batch directive dispatcher for prompt collection pipelines.
///
/// A batch manifest pairs a username with an ordered list of prompt files.
/// Dispatching a batch downloads the first prompt file, turns tutorial
/// mode off, then downloads the remaining files in order.
#[derive(Parser, Debug)]
#[command(name = "promptq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptq.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dispatch a batch manifest to the directive tool.
    ///
    /// Issues one downloadPrompts directive per prompt file plus a single
    /// setTutorialMode directive after the first download. By default the
    /// run continues past failed invocations and always prints a
    /// completion line.
    Run(RunArgs),

    /// Print the directive sequence for a manifest without invoking
    /// anything.
    Plan(PlanArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the batch manifest (YAML).
    pub manifest: PathBuf,

    /// Directive tool command line (may include leading arguments,
    /// e.g. "ssh collector create_directive").
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Stop at the first failed or unspawnable invocation.
    #[arg(long)]
    pub abort_on_error: bool,

    /// Append an NDJSON record per attempted invocation to this file.
    #[arg(long)]
    pub events: Option<PathBuf>,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Path to the batch manifest (YAML).
    pub manifest: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["promptq", "run", "batch.yaml"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.manifest, PathBuf::from("batch.yaml"));
            assert_eq!(args.tool, "create_directive");
            assert!(!args.abort_on_error);
            assert!(args.events.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_run_full() {
        let cli = Cli::try_parse_from([
            "promptq",
            "run",
            "batch.yaml",
            "--tool",
            "ssh collector create_directive",
            "--abort-on-error",
            "--events",
            "logs/events.ndjson",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.tool, "ssh collector create_directive");
            assert!(args.abort_on_error);
            assert_eq!(args.events, Some(PathBuf::from("logs/events.ndjson")));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_plan() {
        let cli = Cli::try_parse_from(["promptq", "plan", "batch.yaml"]).unwrap();
        if let Command::Plan(args) = cli.command {
            assert_eq!(args.manifest, PathBuf::from("batch.yaml"));
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn run_requires_manifest() {
        assert!(Cli::try_parse_from(["promptq", "run"]).is_err());
    }
}
