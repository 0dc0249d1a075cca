//! Prysm CLI - Command-line interface for the Prysm schema builder.
//!
//! This crate provides the `prysm` binary, which replays build plans into a
//! [`prysm_schema::SchemaBuilder`] and prints, validates, or saves the
//! rendered schema.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod plan;
