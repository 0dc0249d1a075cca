//! Styled terminal output utilities.
//!
//! Status output goes to stdout, errors to stderr.

use owo_colors::OwoColorize;
use prysm_schema::{RenderDiagnostic, SchemaError};

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print a degraded relation reported by the renderer
pub fn diagnostic(diagnostic: &RenderDiagnostic) {
    println!(
        "{} {}",
        "⚠".yellow().bold(),
        diagnostic.to_string().yellow()
    );
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a step indicator
pub fn step(current: usize, total: usize, text: &str) {
    println!("{} {}", format!("[{}/{}]", current, total).dimmed(), text);
}

/// Print one rule violation found by the validator
pub fn violation(error: &SchemaError) {
    println!("  {} {}", "✖".red(), error);
}

/// Print a newline
pub fn newline() {
    println!();
}
