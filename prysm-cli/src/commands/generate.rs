//! `prysm generate` command - Render a build plan and save it for a tenant.

use prysm_schema::{FileSink, PrysmConfig};

use crate::cli::GenerateArgs;
use crate::error::CliResult;
use crate::output::{self, success};
use crate::plan::BuildPlan;

/// Run the generate command
pub fn run(args: GenerateArgs, config: &PrysmConfig) -> CliResult<()> {
    output::header("Generate Schema");

    let sink = match &args.output {
        Some(dir) => FileSink::new(dir).with_extension(&config.output.extension),
        None => FileSink::from_config(&config.output),
    };

    output::kv("Plan", &args.plan.display().to_string());
    output::kv("Tenant", &args.tenant);
    output::kv("Output", &sink.root().display().to_string());
    output::newline();

    // Replay plan
    output::step(1, 3, "Replaying build plan...");
    let plan = BuildPlan::load(&args.plan)?;
    let builder = plan.build()?;

    // Render
    output::step(2, 3, "Rendering schema...");
    let rendered = builder.render();
    for diagnostic in &rendered.diagnostics {
        output::diagnostic(diagnostic);
    }

    // Write
    output::step(3, 3, "Writing schema...");
    let path = builder.save(&sink, &args.tenant)?;

    output::newline();
    success(&format!("Schema written to {}", path.display()));

    let stats = builder.schema().stats();
    output::kv("Models", &stats.model_count.to_string());
    output::kv("Fields", &stats.field_count.to_string());
    output::kv("Relations", &stats.relation_count.to_string());

    Ok(())
}
