use runtests_lib::file_system::FileSystemInteractor;

use super::*;

fn sample_command() -> Vec<String> {
    vec!["slice2series".to_string(), "--serial".to_string()]
}

#[test]
fn format_wall_time_test() {
    assert_eq!(format_wall_time(0), "00:00");
    assert_eq!(format_wall_time(59), "00:59");
    assert_eq!(format_wall_time(240), "04:00");
    assert_eq!(format_wall_time(241), "04:01");
}

#[test]
fn format_wall_time_clamps_test() {
    // 100 hours do not fit in an LSF -W request.
    assert_eq!(format_wall_time(6000), "99:00");
    assert_eq!(format_wall_time(6037), "99:37");

    // 99 hours exactly are not clamped.
    assert_eq!(format_wall_time(99 * 60), "99:00");
}

#[test]
fn serial_script_test() {
    let tempdir = tempdir::TempDir::new("script_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };
    let options = RunOptions::default();

    let path = write_script(tempdir.path(), "t1", &options, &sample_command(), &fsi).unwrap();
    let script = fsi.read_utf8(&path).unwrap();

    assert_eq!(path, tempdir.path().join("run-t1.sh"));
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(!script.contains("#BSUB"));
    assert!(script.contains("slice2series --serial"));
    assert!(script.ends_with('\n'));
}

#[test]
fn parallel_script_test() {
    let tempdir = tempdir::TempDir::new("script_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };
    let options = RunOptions {
        nodes: 2,
        tiling: 16,
        queue: "premium".to_string(),
        code: "P1234".to_string(),
        wtime_minutes: 240,
        ..Default::default()
    };

    let path = write_script(tempdir.path(), "t1", &options, &sample_command(), &fsi).unwrap();
    let script = fsi.read_utf8(&path).unwrap();

    assert!(script.contains("#BSUB -n 32"));
    assert!(script.contains("#BSUB -R \"span[ptile=16]\""));
    assert!(script.contains("#BSUB -q premium"));
    assert!(script.contains("#BSUB -o reshaper-t1.%J.log"));
    assert!(script.contains("#BSUB -J reshaper-t1"));
    assert!(script.contains("#BSUB -P P1234"));
    assert!(script.contains("#BSUB -W 04:00"));
    assert!(script.contains("export MP_TIMEOUT=14400"));
}

#[test]
fn script_overwrites_test() {
    let tempdir = tempdir::TempDir::new("script_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };
    let options = RunOptions::default();

    std::fs::write(tempdir.path().join("run-t1.sh"), "stale contents").unwrap();

    let path = write_script(tempdir.path(), "t1", &options, &sample_command(), &fsi).unwrap();
    let script = fsi.read_utf8(&path).unwrap();

    assert!(!script.contains("stale contents"));
}

#[test]
fn script_command_is_last_statement_test() {
    let tempdir = tempdir::TempDir::new("script_test").unwrap();
    let fsi = FileSystemInteractor { dry_run: false };
    let options = RunOptions::default();

    let path = write_script(tempdir.path(), "t1", &options, &sample_command(), &fsi).unwrap();
    let script = fsi.read_utf8(&path).unwrap();

    assert_eq!(script.lines().last().unwrap(), "slice2series --serial");
}
