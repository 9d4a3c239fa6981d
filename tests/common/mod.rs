//! Shared sample configurations for the integration tests.

use buildwrap::capture::Configuration;

/// A local-toolchain record with a working directory, two switches and a
/// resolved source path.
pub fn local_configuration() -> Configuration {
    Configuration {
        compiler_kind: "clang".to_string(),
        compiler_executable: Some("/usr/bin/clang".to_string()),
        compiler_working_dir: Some("/work".to_string()),
        compiler_switches: vec!["-I/x".to_string(), "-DFOO".to_string()],
        source_file: Some("/work/src/main.c".to_string()),
        ..Configuration::default()
    }
}

/// A remote-toolchain record with probed macros and two include directories.
pub fn remote_configuration() -> Configuration {
    Configuration {
        compiler_kind: "gcc".to_string(),
        compiler_executable: Some("/opt/cross/gcc".to_string()),
        compiler_working_dir: Some("/build".to_string()),
        source_file: Some("/build/src/io.c".to_string()),
        remote_toolchain: true,
        predefined_macros: "#define A 1".to_string(),
        includes: vec!["/a".to_string(), "/b".to_string()],
        ..Configuration::default()
    }
}
