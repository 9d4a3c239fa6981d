//! Error handling for the I/O layer.
//!
//! The document emitter itself never fails: every input value is treated as
//! plain text and escaped. Errors only arise around it, when reading or
//! parsing the capture input and when persisting the finished document.

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong outside the emitter.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildwrapError {
    /// The capture input file could not be read.
    #[error("failed to read capture input '{path}'")]
    #[diagnostic(code(buildwrap::io::read))]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The capture input file is not a JSON array of configuration records.
    #[error("capture input '{path}' is not valid configuration JSON")]
    #[diagnostic(
        code(buildwrap::parse::input),
        help("the input must be a JSON array of configuration objects, one per compiled file")
    )]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The finished document could not be written.
    #[error("failed to write capture document '{path}'")]
    #[diagnostic(code(buildwrap::io::write))]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Prints an error with full miette diagnostics.
///
/// This gives the CLI rich formatting with diagnostic codes and help text;
/// use it wherever an error reaches the user.
pub fn print_error(error: BuildwrapError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
