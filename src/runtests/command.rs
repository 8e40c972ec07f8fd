use std::path::Path;

use runtests_lib::constants::PARALLEL_LAUNCHER;
use runtests_lib::constants::RESHAPER_COMMAND;
use runtests_lib::constants::RESHAPER_VERBOSITY;
use runtests_lib::options::RunOptions;
use runtests_lib::testdb::TestDescriptor;

/// Assemble the reshaper invocation for one test.
///
/// The reshaper is a flag-based CLI, so the token order is fixed. Input
/// globs are passed through verbatim, expansion is the reshaper's job.
/// For a fixed descriptor and options the result is deterministic.
pub fn build_command(
    descriptor: &TestDescriptor,
    options: &RunOptions,
    output_dir: &Path,
) -> Vec<String> {
    let mut run_cmd = Vec::new();

    if options.is_parallel() {
        run_cmd.push(PARALLEL_LAUNCHER.to_string());
    }

    run_cmd.push(RESHAPER_COMMAND.to_string());

    if !options.is_parallel() {
        run_cmd.push("--serial".to_string());
    }

    if options.once {
        run_cmd.push("--once".to_string());
    }

    if options.skip_existing {
        run_cmd.push("--skip_existing".to_string());
    }

    if options.overwrite {
        run_cmd.push("--overwrite".to_string());
    }

    run_cmd.push("-v".to_string());
    run_cmd.push(RESHAPER_VERBOSITY.to_string());

    if options.only > 0 {
        run_cmd.push("-l".to_string());
        run_cmd.push(options.only.to_string());
    }

    run_cmd.push("-f".to_string());
    run_cmd.push(options.format.clone());

    run_cmd.push("-p".to_string());
    run_cmd.push(
        output_dir
            .join(&descriptor.output_prefix)
            .display()
            .to_string(),
    );

    run_cmd.push("-s".to_string());
    run_cmd.push(descriptor.output_suffix.clone());

    for var_name in &descriptor.metadata {
        run_cmd.push("-m".to_string());
        run_cmd.push(var_name.clone());
    }

    for input_glob in &descriptor.input_globs {
        run_cmd.push(descriptor.input_dir.join(input_glob).display().to_string());
    }

    run_cmd
}

#[cfg(test)]
#[path = "tests/command.rs"]
mod tests;
