use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use log::warn;
use runtests_lib::constants::JOB_NAME_PREFIX;
use runtests_lib::constants::MAX_WALL_HOURS;
use runtests_lib::constants::POE_EXPORTS;
use runtests_lib::constants::SCRIPT_PREFIX;
use runtests_lib::file_system::FileOperations;
use runtests_lib::options::RunOptions;

/// Format a wall-clock request in minutes as the `HH:MM` string LSF
/// expects.
///
/// LSF cannot represent more than 99 hours, larger requests are clamped
/// with a warning.
pub fn format_wall_time(minutes: u64) -> String {
    let mut hours = minutes / 60;

    if hours > MAX_WALL_HOURS {
        warn!("Requested number of hours too large, limiting to {MAX_WALL_HOURS}");
        hours = MAX_WALL_HOURS;
    }

    format!("{:02}:{:02}", hours, minutes % 60)
}

/// The `#BSUB` resource-request preamble of a parallel run script.
fn scheduler_preamble(test_name: &str, options: &RunOptions) -> Vec<String> {
    let mut lines = vec![
        format!("#BSUB -n {}", options.total_processes()),
        format!("#BSUB -R \"span[ptile={}]\"", options.tiling),
        format!("#BSUB -q {}", options.queue),
        "#BSUB -a poe".to_string(),
        "#BSUB -x".to_string(),
        format!("#BSUB -o {JOB_NAME_PREFIX}{test_name}.%J.log"),
        format!("#BSUB -J {JOB_NAME_PREFIX}{test_name}"),
        format!("#BSUB -P {}", options.code),
        format!("#BSUB -W {}", format_wall_time(options.wtime_minutes)),
        String::new(),
    ];

    lines.extend(POE_EXPORTS.iter().map(|e| e.to_string()));
    lines.push(String::new());

    lines
}

/// Write the self-contained run script of one test.
///
/// The script carries the scheduler preamble iff the run is parallel and
/// ends with the assembled command. An existing script is overwritten
/// unconditionally.
pub fn write_script(
    test_dir: &Path,
    test_name: &str,
    options: &RunOptions,
    command: &[String],
    fs: &impl FileOperations,
) -> Result<PathBuf> {
    let script_path = test_dir.join(format!("{SCRIPT_PREFIX}{test_name}.sh"));

    let mut lines = vec!["#!/bin/bash".to_string()];

    if options.is_parallel() {
        lines.extend(scheduler_preamble(test_name, options));
    }

    lines.extend(
        [
            "# NOTE: Your PATH and PYTHONPATH must be properly set",
            "#       before this script will run without error",
            "",
            "# Necessary modules to load",
            "module load python",
            "module load all-python-libs",
            "",
        ]
        .map(String::from),
    );

    lines.push(command.join(" "));
    lines.push(String::new());

    fs.write_utf8_truncate(&script_path, &lines.join("\n"))?;
    info!("Run script written to {script_path:?}");

    Ok(script_path)
}

#[cfg(test)]
#[path = "tests/script.rs"]
mod tests;
