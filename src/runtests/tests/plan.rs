use runtests_lib::file_system::FileSystemInteractor;

use super::*;

#[test]
fn plan_directory_serial_test() {
    let options = RunOptions::default();
    let dir = plan_directory(Path::new("results"), "camfv_1deg", &options);

    assert_eq!(dir, PathBuf::from("results/camfv_1deg/ser/netcdf4c"));
    assert!(!dir.display().to_string().contains("par"));
}

#[test]
fn plan_directory_parallel_test() {
    let options = RunOptions {
        nodes: 2,
        tiling: 16,
        ..Default::default()
    };
    let dir = plan_directory(Path::new("results"), "camfv_1deg", &options);

    assert_eq!(dir, PathBuf::from("results/camfv_1deg/par2x16/netcdf4c"));
    assert!(!dir.display().to_string().contains("ser"));
}

#[test]
fn plan_directory_uses_format_test() {
    let options = RunOptions {
        format: "netcdf".to_string(),
        ..Default::default()
    };
    let dir = plan_directory(Path::new("results"), "t", &options);

    assert_eq!(dir, PathBuf::from("results/t/ser/netcdf"));
}

#[test]
fn ensure_dir_test() {
    let tempdir = tempdir::TempDir::new("plan_test").unwrap();
    let path = tempdir.path().join("a").join("b");
    let fsi = FileSystemInteractor { dry_run: false };

    ensure_dir("Test", &path, &fsi).unwrap();
    assert!(path.is_dir());

    // A second call must not fail on the existing tree.
    ensure_dir("Test", &path, &fsi).unwrap();
    assert!(path.is_dir());
}

#[test]
fn prepare_test() {
    let tempdir = tempdir::TempDir::new("plan_test").unwrap();

    let descriptor = TestDescriptor {
        input_dir: PathBuf::from("/data/camfv"),
        input_globs: vec!["*.nc".to_string()],
        output_prefix: "camfv.".to_string(),
        output_suffix: ".nc".to_string(),
        metadata: vec!["time".to_string()],
    };
    let options = RunOptions::default();
    let fsi = FileSystemInteractor { dry_run: false };

    let plan =
        RunPlan::prepare(tempdir.path(), "camfv_1deg", &descriptor, &options, &fsi).unwrap();

    assert!(plan.test_dir.is_dir());
    assert!(plan.output_dir.is_dir());
    assert!(plan.script_path.is_file());
    assert_eq!(plan.script_path, plan.test_dir.join("run-camfv_1deg.sh"));
}
