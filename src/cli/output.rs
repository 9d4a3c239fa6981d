//! Handles all user-facing output for the CLI.
//!
//! The document itself goes to stdout or a file untouched; everything a
//! human reads (summaries, per-record inspect lines) is printed here so the
//! commands share one look.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::capture::Configuration;

/// Color choice for stderr-side status output: colored only on a tty.
pub fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints the post-generate summary: how many records went in and how many
/// JSON objects the document carries.
pub fn print_summary(destination: &str, records: usize, objects: usize) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    eprint!("wrote {destination}");
    let _ = stderr.reset();
    eprintln!(": {records} records, {objects} capture objects");
}

/// Prints one inspect line per record, then the totals.
pub fn print_inspection(configurations: &[Configuration]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for (index, configuration) in configurations.iter().enumerate() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        print!("#{index} ");
        let _ = stdout.reset();
        let shape = if configuration.remote_toolchain {
            "remote"
        } else {
            "local"
        };
        let source = configuration.source_file.as_deref().unwrap_or("<no file>");
        println!(
            "{} {} {} ({} objects)",
            configuration.compiler_kind,
            shape,
            source,
            configuration.capture_count()
        );
    }
    let objects: usize = configurations.iter().map(Configuration::capture_count).sum();
    println!("{} records, {} capture objects", configurations.len(), objects);
}
