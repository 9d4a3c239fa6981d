//! The capture document accumulator.
//!
//! Builds the `{"version":0,"captures":[...]}` text the analysis engine
//! reads back. The buffer is append-only: each `add` emits one array entry
//! (one object for a local toolchain, three comma-joined objects for a
//! remote one) and nothing emitted is ever revised. Byte layout matters
//! here; the consumer compares this output against its own writer, so field
//! order, comma placement and escaping are all fixed.

use crate::capture::Configuration;
use crate::escape::{quote, quote_opt};

const DOCUMENT_PREFIX: &str = "{\"version\":0,\"captures\":[";
const DOCUMENT_SUFFIX: &str = "]}";

const STDERR_HEADER: &str = "#include <...> search starts here:\n";
const STDERR_TRAILER: &str = "End of search list.\n";

/// Append-only accumulator for one capture document.
///
/// Call [`add`](Self::add) once per configuration, in the order the entries
/// should appear, then [`build`](Self::build) exactly once. `build` takes
/// the builder by value, so a second `build` or an `add` after `build` is a
/// compile error rather than a malformed document.
///
/// # Examples
///
/// ```rust
/// use buildwrap::document::DocumentBuilder;
/// let builder = DocumentBuilder::new();
/// assert_eq!(builder.build(), r#"{"version":0,"captures":[]}"#);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    buffer: String,
    first: bool,
}

impl DocumentBuilder {
    /// Creates an empty builder seeded with the document envelope prefix.
    pub fn new() -> Self {
        Self {
            buffer: String::from(DOCUMENT_PREFIX),
            first: true,
        }
    }

    /// Appends one capture entry for `configuration`.
    ///
    /// Never fails: every field is treated as plain text and escaped, with
    /// absent paths degrading to the empty string. Returns the builder for
    /// chaining.
    pub fn add(&mut self, configuration: &Configuration) -> &mut Self {
        if self.first {
            self.first = false;
        } else {
            self.buffer.push(',');
        }
        if configuration.remote_toolchain {
            self.push_remote_entry(configuration);
        } else {
            self.push_local_entry(configuration);
        }
        self
    }

    /// Closes the envelope and returns the document text.
    pub fn build(mut self) -> String {
        self.buffer.push_str(DOCUMENT_SUFFIX);
        self.buffer
    }

    fn push_local_entry(&mut self, entry: &Configuration) {
        let quoted_executable = quote_opt(entry.compiler_executable.as_deref());
        self.buffer.push_str("{\"compiler\":\"");
        self.buffer.push_str(&entry.compiler_kind);
        self.buffer.push_str("\",\"cwd\":");
        self.buffer
            .push_str(&quote_opt(entry.compiler_working_dir.as_deref()));
        self.buffer.push_str(",\"executable\":");
        self.buffer.push_str(&quoted_executable);
        self.buffer.push(',');
        if entry.is_header_file {
            self.buffer
                .push_str("\"properties\":{\"isHeaderFile\":\"true\"},");
        }
        self.buffer.push_str("\"cmd\":[");
        self.buffer.push_str(&quoted_executable);
        self.buffer.push(',');
        self.buffer.push_str(&quote_opt(entry.source_file.as_deref()));
        for switch in &entry.compiler_switches {
            self.buffer.push(',');
            self.buffer.push_str(&quote(switch));
        }
        self.buffer.push_str("]}");
    }

    fn push_remote_entry(&mut self, entry: &Configuration) {
        let quoted_file_path = quote_opt(entry.source_file.as_deref());
        let stdout = format!("{}\n", entry.predefined_macros);
        let mut stderr = String::from(STDERR_HEADER);
        for include in &entry.includes {
            stderr.push(' ');
            stderr.push_str(include);
            stderr.push('\n');
        }
        stderr.push_str(STDERR_TRAILER);

        // The consumer runs a two-pass probing protocol and expects the
        // probe object twice, byte for byte.
        self.push_probe(entry, &quoted_file_path, &stdout, &stderr);
        self.push_probe(entry, &quoted_file_path, &stdout, &stderr);

        self.buffer.push_str("{\"compiler\":\"");
        self.buffer.push_str(&entry.compiler_kind);
        self.buffer.push_str("\",\"cwd\":");
        self.buffer
            .push_str(&quote_opt(entry.compiler_working_dir.as_deref()));
        self.buffer.push_str(",\"executable\":");
        self.buffer.push_str(&quoted_file_path);
        self.buffer.push(',');
        if entry.is_header_file {
            self.buffer
                .push_str("\"properties\":{\"isHeaderFile\":\"true\"},");
        }
        self.buffer.push_str("\"cmd\":[");
        self.buffer
            .push_str(&quote_opt(entry.compiler_executable.as_deref()));
        self.buffer.push(',');
        self.buffer.push_str(&quoted_file_path);
        self.buffer.push_str("]}");
    }

    fn push_probe(
        &mut self,
        entry: &Configuration,
        quoted_file_path: &str,
        stdout: &str,
        stderr: &str,
    ) {
        self.buffer.push_str("{\"compiler\":\"");
        self.buffer.push_str(&entry.compiler_kind);
        self.buffer.push_str("\",\"executable\":");
        self.buffer.push_str(quoted_file_path);
        self.buffer.push_str(",\"stdout\":");
        self.buffer.push_str(&quote(stdout));
        self.buffer.push_str(",\"stderr\":");
        self.buffer.push_str(&quote(stderr));
        self.buffer.push_str("},");
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a full document from a slice of configurations in one call.
pub fn generate_document(configurations: &[Configuration]) -> String {
    let mut builder = DocumentBuilder::new();
    for configuration in configurations {
        builder.add(configuration);
    }
    builder.build()
}
