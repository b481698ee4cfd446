//! Defines the command-line arguments and subcommands for the Stout CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "stout",
    version,
    about = "Parse and evaluate compact validator descriptors such as \"required|max:10\"."
)]
pub struct StoutArgs {
    /// Path to a YAML or JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a descriptor and print the validators it builds.
    Parse {
        /// The descriptor, e.g. "required|max:10,error[Too long]".
        descriptor: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a value against a descriptor. Exits with status 1 on any failure.
    Check {
        /// The descriptor to evaluate against.
        descriptor: String,
        /// The subject: JSON if it parses as JSON, a plain string otherwise.
        value: String,
    },
    /// Show how each clause of a descriptor is broken down.
    Explain {
        /// The descriptor to break down.
        descriptor: String,
    },
    /// List all registered validator kinds.
    ListValidators,
    /// List all validation states recognised in message fragments.
    ListStates,
}
