//! The buildwrap command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::{fs, process};

use clap::Parser;

use crate::capture::{load_configurations, Configuration};
use crate::cli::args::{BuildwrapArgs, Command};
use crate::document::generate_document;
use crate::errors::{print_error, BuildwrapError};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = BuildwrapArgs::parse();

    let result = match args.command {
        Command::Generate { input, output } => handle_generate(&input, output.as_deref()),
        Command::Inspect { input } => handle_inspect(&input),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

/// Handles the `generate` subcommand.
fn handle_generate(input: &Path, output: Option<&Path>) -> Result<(), BuildwrapError> {
    let configurations = load_configurations(input)?;
    let document = generate_document(&configurations);
    let objects: usize = configurations.iter().map(Configuration::capture_count).sum();

    match output {
        Some(path) => {
            fs::write(path, &document).map_err(|source| BuildwrapError::WriteOutput {
                path: path.display().to_string(),
                source,
            })?;
            output::print_summary(&path.display().to_string(), configurations.len(), objects);
        }
        None => {
            println!("{document}");
        }
    }
    Ok(())
}

/// Handles the `inspect` subcommand.
fn handle_inspect(input: &Path) -> Result<(), BuildwrapError> {
    let configurations = load_configurations(input)?;
    output::print_inspection(&configurations);
    Ok(())
}
