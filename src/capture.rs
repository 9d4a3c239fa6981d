//! The compiler invocation capture record and its on-disk input format.
//!
//! A `Configuration` describes how one source file was compiled: which
//! compiler family, where, with what arguments, or (for remote toolchains)
//! what the probed preprocessor reported. Records arrive from a build-system
//! inspection layer as a JSON array using that layer's camelCase field names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::BuildwrapError;

/// One resolved compiler invocation, ready to be rendered into the capture
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Compiler family label. Embedded into the document verbatim, so it
    /// must be a plain identifier such as `clang` or `msvc-cl`.
    pub compiler_kind: String,
    /// Path to the compiler binary.
    pub compiler_executable: Option<String>,
    /// Working directory of the compilation.
    pub compiler_working_dir: Option<String>,
    /// Command-line arguments, in invocation order.
    pub compiler_switches: Vec<String>,
    /// Canonical absolute path of the compiled source file.
    pub source_file: Option<String>,
    /// True when the file is a header rather than a translation unit.
    pub is_header_file: bool,
    /// Selects the remote (probed) output shape instead of the local one.
    pub remote_toolchain: bool,
    /// Predefined-macro text blob, rendered as synthetic stdout in the
    /// remote shape.
    pub predefined_macros: String,
    /// Include search directories, rendered into the synthetic stderr
    /// transcript of the remote shape.
    pub includes: Vec<String>,
}

impl Configuration {
    /// Number of JSON objects this record expands into: one for a local
    /// toolchain, three for a remote one (two probes plus the final entry).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwrap::capture::Configuration;
    /// let local = Configuration::default();
    /// assert_eq!(local.capture_count(), 1);
    /// let remote = Configuration { remote_toolchain: true, ..Configuration::default() };
    /// assert_eq!(remote.capture_count(), 3);
    /// ```
    pub fn capture_count(&self) -> usize {
        if self.remote_toolchain {
            3
        } else {
            1
        }
    }
}

/// Reads a JSON array of configuration records from `path`.
pub fn load_configurations(path: &Path) -> Result<Vec<Configuration>, BuildwrapError> {
    let text = fs::read_to_string(path).map_err(|source| BuildwrapError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| BuildwrapError::ParseInput {
        path: path.display().to_string(),
        source,
    })
}
