//! Defines the command-line arguments and subcommands for the buildwrap CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "buildwrap",
    version,
    about = "Renders compiler invocation captures into the build-wrapper JSON document."
)]
pub struct BuildwrapArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a configuration list and emit the capture document.
    Generate {
        /// The path to the JSON file holding the configuration records.
        #[arg(required = true)]
        input: PathBuf,
        /// Write the document here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize a configuration list without emitting the document.
    Inspect {
        /// The path to the JSON file holding the configuration records.
        #[arg(required = true)]
        input: PathBuf,
    },
}
