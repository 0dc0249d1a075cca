//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Prysm CLI - Build Prisma schemas from build plans
#[derive(Parser, Debug)]
#[command(name = "prysm")]
#[command(version)]
#[command(about = "Prysm CLI - Build Prisma schemas from build plans", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./prysm.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a build plan and save it for a tenant
    Generate(GenerateArgs),

    /// Render a build plan to stdout
    Print(PrintArgs),

    /// Check a build plan against the strict schema rules
    Validate(ValidateArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Generate Command
// =============================================================================

/// Arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the build plan (.toml or .json)
    #[arg(short, long)]
    pub plan: PathBuf,

    /// Tenant id the schema is saved under
    #[arg(short, long)]
    pub tenant: String,

    /// Output directory (overrides `output.directory`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// =============================================================================
// Print Command
// =============================================================================

/// Arguments for the `print` command
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Path to the build plan (.toml or .json)
    #[arg(short, long)]
    pub plan: PathBuf,
}

// =============================================================================
// Validate Command
// =============================================================================

/// Arguments for the `validate` command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the build plan (.toml or .json)
    #[arg(short, long)]
    pub plan: PathBuf,
}
