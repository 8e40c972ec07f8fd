use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use runtests_lib::file_system::FileOperations;
use runtests_lib::options::RunOptions;
use runtests_lib::testdb::TestDescriptor;

use crate::command::build_command;
use crate::script::write_script;

/// Everything derived for one test from its descriptor and the run
/// options.
///
/// A plan has no persistence beyond the script and log files it leaves on
/// disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// The name of the test this plan was built for.
    pub test_name: String,

    /// The run directory of the test.
    pub test_dir: PathBuf,

    /// The directory the reshaper writes its output files to.
    pub output_dir: PathBuf,

    /// The assembled reshaper invocation, as a token sequence.
    pub command: Vec<String>,

    /// Where the run script was written.
    pub script_path: PathBuf,
}

impl RunPlan {
    /// Plan one test: create its directories, assemble the command and
    /// write the run script.
    ///
    /// `base_dir` is the directory all run directories live under,
    /// normally [runtests_lib::constants::RESULTS_DIR] resolved against
    /// the working directory.
    pub fn prepare(
        base_dir: &Path,
        test_name: &str,
        descriptor: &TestDescriptor,
        options: &RunOptions,
        fs: &impl FileOperations,
    ) -> Result<RunPlan> {
        let test_dir = plan_directory(base_dir, test_name, options);
        ensure_dir("Test", &test_dir, fs)?;

        let output_dir = test_dir.join("output");
        ensure_dir("Output", &output_dir, fs)?;

        let command = build_command(descriptor, options, &output_dir);
        let script_path = write_script(&test_dir, test_name, options, &command, fs)?;

        Ok(RunPlan {
            test_name: test_name.to_string(),
            test_dir,
            output_dir,
            command,
            script_path,
        })
    }
}

/// Compute the run directory of a test.
///
/// The path is `<base>/<name>/<par{nodes}x{tiling} | ser>/<format>`, the
/// parallel branch is selected iff the node count is greater than zero.
pub fn plan_directory(base: &Path, test_name: &str, options: &RunOptions) -> PathBuf {
    let mut dir = base.join(test_name);

    if options.is_parallel() {
        dir.push(format!("par{}x{}", options.nodes, options.tiling));
    } else {
        dir.push("ser");
    }

    dir.push(&options.format);
    dir
}

/// Create a directory tree if it does not exist yet.
///
/// Existing directories are left untouched and reported as such.
pub fn ensure_dir(label: &str, path: &Path, fs: &impl FileOperations) -> Result<()> {
    if path.is_dir() {
        info!("{label} directory {path:?} already exists");
    } else {
        fs.create_dir_all(path)?;
        info!("{label} directory {path:?} created");
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/plan.rs"]
mod tests;
