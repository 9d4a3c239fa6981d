// Buildwrap CLI entry point.
// Usage: buildwrap generate <input.json> [-o <output.json>]
//        buildwrap inspect <input.json>

use buildwrap::cli;

fn main() {
    cli::run();
}
