//! `prysm validate` command - Check a build plan against the strict rules.

use prysm_schema::{SchemaError, validate_schema};

use crate::cli::ValidateArgs;
use crate::error::{CliError, CliResult};
use crate::output::{self, success};
use crate::plan::BuildPlan;

/// Run the validate command
pub fn run(args: ValidateArgs) -> CliResult<()> {
    output::header("Validate Plan");

    output::kv("Plan", &args.plan.display().to_string());
    output::newline();

    // Replay plan
    output::step(1, 2, "Replaying build plan...");
    let builder = BuildPlan::load(&args.plan)?.build()?;

    // Validate schema
    output::step(2, 2, "Running validation checks...");
    let result = validate_schema(builder.schema());

    output::newline();

    match result {
        Ok(()) => success("Schema is valid!"),
        Err(SchemaError::ValidationFailed { count, errors }) => {
            output::error("Schema validation failed!");
            output::newline();
            output::section("Errors");
            for error in &errors {
                output::violation(error);
            }
            return Err(CliError::Validation(format!(
                "Found {} validation errors",
                count
            )));
        }
        Err(other) => return Err(other.into()),
    }

    output::newline();

    // Print schema summary
    let stats = builder.schema().stats();
    output::section("Schema Summary");
    output::kv("Models", &stats.model_count.to_string());
    output::kv("Fields", &stats.field_count.to_string());
    output::kv("Relations", &stats.relation_count.to_string());

    Ok(())
}
