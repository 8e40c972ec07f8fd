use std::fs::File;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use runtests_lib::constants::JOB_NAME_PREFIX;
use runtests_lib::constants::SCHEDULER_SUBMIT;
use runtests_lib::ctx;
use runtests_lib::file_system::FileOperations;
use runtests_lib::options::RunOptions;

use crate::plan::RunPlan;

/// The interface for submitting a prepared run script to the batch
/// scheduler.
///
/// This can be via the CLI of the scheduler or, in tests, a stub.
pub trait Scheduler {
    /// Submit the script to the scheduler, with `work_dir` as the
    /// submission working directory.
    ///
    /// Returns the scheduler's acknowledgement, typically a job id line.
    fn submit(&self, script_path: &Path, work_dir: &Path) -> Result<String>;
}

/// Submission to LSF by piping the script to `bsub` on standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsubCli;

impl Scheduler for BsubCli {
    fn submit(&self, script_path: &Path, work_dir: &Path) -> Result<String> {
        let script = File::open(script_path).with_context(ctx!(
          "Could not open the run script {script_path:?}", ;
          "Ensure that the script was written before launching",
        ))?;

        let proc = Command::new(SCHEDULER_SUBMIT)
            .current_dir(work_dir)
            .stdin(Stdio::from(script))
            .output()
            .with_context(ctx!(
              "Failed to submit the job to LSF", ;
              "Ensure that you have permissions to submit jobs to the cluster",
            ))?;

        if !proc.status.success() {
            return Err(anyhow!("{SCHEDULER_SUBMIT} failed to run")).with_context(ctx!(
                "{SCHEDULER_SUBMIT} printed: {}", String::from_utf8_lossy(&proc.stderr);
                "Please ensure that you are running on the cluster",
            ));
        }

        Ok(String::from_utf8_lossy(&proc.stdout).to_string())
    }
}

/// Launch a prepared test.
///
/// Serial runs execute the script as a local child process and write its
/// combined output to a per-test log file. Parallel runs submit the script
/// through the scheduler and print the acknowledgement. Both run with the
/// test directory as the child's working directory, the harness itself
/// never changes directory.
pub fn run_test(
    plan: &RunPlan,
    options: &RunOptions,
    scheduler: &impl Scheduler,
    fs: &impl FileOperations,
) -> Result<()> {
    info!("Launching test job: {}", plan.test_name);

    if options.is_parallel() {
        let acknowledgement = scheduler.submit(&plan.script_path, &plan.test_dir)?;
        println!("{}", acknowledgement.trim());

        return Ok(());
    }

    fs.set_permissions(&plan.script_path, 0o755)?;

    let script_path = fs.canonicalize(&plan.script_path)?;
    let child = Command::new(&script_path)
        .current_dir(&plan.test_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(ctx!(
          "Could not launch the run script {script_path:?}", ;
          "Ensure that the script is executable and /bin/bash exists",
        ))?;

    debug!("Launched {script_path:?} with pid {}", child.id());

    let output = child.wait_with_output().with_context(ctx!(
      "Could not wait for the run script {script_path:?}", ;
      "",
    ))?;

    info!("Test job finished with {}", output.status);

    // The log holds both streams, stdout first.
    let mut log = output.stdout;
    log.extend_from_slice(&output.stderr);

    let log_path = plan
        .test_dir
        .join(format!("{JOB_NAME_PREFIX}{}.log", plan.test_name));
    fs.write_bytes_truncate(&log_path, &log)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/launch.rs"]
mod tests;
