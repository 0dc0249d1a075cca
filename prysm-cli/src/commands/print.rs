//! `prysm print` command - Render a build plan to stdout.

use crate::cli::PrintArgs;
use crate::error::CliResult;
use crate::plan::BuildPlan;

/// Run the print command
///
/// Only the schema text is written to stdout. Degraded relations are
/// reported through the log.
pub fn run(args: PrintArgs) -> CliResult<()> {
    let builder = BuildPlan::load(&args.plan)?.build()?;
    println!("{}", builder.generate_schema_text());
    Ok(())
}
