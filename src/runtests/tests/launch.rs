use std::path::PathBuf;

use runtests_lib::file_system::FileSystemInteractor;

use super::*;

/// A scheduler stub that acknowledges every submission.
struct StubScheduler;

impl Scheduler for StubScheduler {
    fn submit(&self, _script_path: &Path, _work_dir: &Path) -> Result<String> {
        Ok("Job <42> is submitted to queue <economy>.\n".to_string())
    }
}

fn plan_for_script(test_dir: PathBuf, script_path: PathBuf) -> RunPlan {
    RunPlan {
        test_name: "t1".to_string(),
        output_dir: test_dir.join("output"),
        test_dir,
        command: vec![],
        script_path,
    }
}

#[test]
fn serial_run_writes_log_test() {
    let tempdir = tempdir::TempDir::new("launch_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };

    let script_path = tempdir.path().join("run-t1.sh");
    std::fs::write(&script_path, "#!/bin/bash\necho on stdout\necho on stderr 1>&2\n").unwrap();

    let plan = plan_for_script(tempdir.path().to_path_buf(), script_path);
    let options = RunOptions::default();

    run_test(&plan, &options, &StubScheduler, &fsi).unwrap();

    let log = fsi
        .read_utf8(&tempdir.path().join("reshaper-t1.log"))
        .unwrap();
    assert!(log.contains("on stdout"));
    assert!(log.contains("on stderr"));
}

#[test]
fn serial_run_missing_script_test() {
    let tempdir = tempdir::TempDir::new("launch_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };

    let plan = plan_for_script(
        tempdir.path().to_path_buf(),
        tempdir.path().join("run-t1.sh"),
    );

    assert!(run_test(&plan, &RunOptions::default(), &StubScheduler, &fsi).is_err());
}

#[test]
fn parallel_run_submits_test() {
    let tempdir = tempdir::TempDir::new("launch_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };

    let script_path = tempdir.path().join("run-t1.sh");
    std::fs::write(&script_path, "#!/bin/bash\n").unwrap();

    let plan = plan_for_script(tempdir.path().to_path_buf(), script_path);
    let options = RunOptions {
        nodes: 2,
        ..Default::default()
    };

    run_test(&plan, &options, &StubScheduler, &fsi).unwrap();

    // Submission goes through the scheduler, no local log is written.
    assert!(!tempdir.path().join("reshaper-t1.log").exists());
}
