//! runtests, a harness for the slice-to-series reshaper tests.

/// The command line interface and relevant structures.
pub mod cli;

/// Planning and creation of per-test run directories.
pub mod plan;

/// Assembly of the reshaper command line.
pub mod command;

/// Generation of the per-test launch script.
pub mod script;

/// Launching prepared tests, locally or through LSF.
pub mod launch;

/// The main CLI entry-point of the `runtests` utility.
///
/// This function parses command-line arguments and prepares (and
/// optionally launches) the requested tests.
fn main() {
    cli::process::parse_command();
}
