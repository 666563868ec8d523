//! The `plan` command: show a batch's directive sequence without
//! dispatching it.

use crate::batch::Batch;
use crate::cli::PlanArgs;
use crate::directive::plan_batch;
use crate::error::Result;

pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let batch = Batch::load(&args.manifest)?;
    let directives = plan_batch(&batch);

    println!(
        "Batch for {} ({} prompt files, {} directives):",
        batch.user,
        batch.prompts.len(),
        directives.len()
    );
    for directive in &directives {
        println!("  {} {}", directive.kind, directive.argument);
    }

    Ok(())
}
