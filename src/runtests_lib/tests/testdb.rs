use std::fs;

use super::*;
use crate::file_system::FileSystemInteractor;

/// A two-test database in the format of `testinfo.json`.
const SAMPLE_DB: &str = r#"{
  "camfv_1deg": {
    "input_dir": "/glade/data/camfv",
    "input_globs": ["*.cam2.h0.*.nc"],
    "output_prefix": "camfv.",
    "output_suffix": ".nc",
    "metadata": ["lat", "lon", "time"]
  },
  "pop_1deg": {
    "input_dir": "/glade/data/pop",
    "input_globs": ["*.pop.h.*.nc", "*.pop.h2.*.nc"],
    "output_prefix": "pop.",
    "output_suffix": ".nc",
    "metadata": ["TLONG", "TLAT", "time"]
  }
}"#;

fn sample_database() -> TestDatabase {
    serde_json::from_str(SAMPLE_DB).unwrap()
}

#[test]
fn load_test() {
    let tempdir = tempdir::TempDir::new("testdb").unwrap();
    let filepath = tempdir.path().join("testinfo.json");
    let fsi = FileSystemInteractor { dry_run: false };

    fs::write(&filepath, SAMPLE_DB).unwrap();

    let db = TestDatabase::load(Some(&filepath), &fsi).unwrap();
    assert_eq!(db.len(), 2);
    assert!(db.contains("camfv_1deg"));
    assert!(db.contains("pop_1deg"));
}

#[test]
fn load_missing_test() {
    let tempdir = tempdir::TempDir::new("testdb").unwrap();
    let filepath = tempdir.path().join("nonexistent.json");
    let fsi = FileSystemInteractor { dry_run: false };

    assert!(TestDatabase::load(Some(&filepath), &fsi).is_err());
}

#[test]
fn names_are_sorted_test() {
    let db = sample_database();
    let names: Vec<&String> = db.names().collect();

    assert_eq!(names, vec!["camfv_1deg", "pop_1deg"]);
}

#[test]
fn describe_test() {
    let db = sample_database();
    let descriptor = db.describe("pop_1deg").unwrap();

    assert_eq!(descriptor.output_prefix, "pop.");
    assert_eq!(descriptor.input_globs.len(), 2);
    assert_eq!(descriptor.metadata, vec!["TLONG", "TLAT", "time"]);
}

#[test]
fn describe_unknown_test() {
    let db = sample_database();
    let err = db.describe("no_such_test").unwrap_err();

    assert!(err.root_cause().to_string().contains("not defined"));
}
