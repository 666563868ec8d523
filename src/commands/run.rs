//! The `run` command: load a batch manifest and dispatch it.

use crate::batch::Batch;
use crate::cli::RunArgs;
use crate::dispatch::{FailurePolicy, dispatch_batch};
use crate::error::Result;
use crate::events::EventLog;
use crate::tool::CommandTool;

pub fn cmd_run(args: RunArgs) -> Result<()> {
    let batch = Batch::load(&args.manifest)?;
    let tool = CommandTool::from_command_line(&args.tool)?;
    let policy = if args.abort_on_error {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Continue
    };
    let log = args.events.map(EventLog::new);

    dispatch_batch(&batch, &tool, policy, log.as_ref())?;
    Ok(())
}
