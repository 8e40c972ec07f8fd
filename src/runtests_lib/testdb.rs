use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::bailc;
use crate::constants::TESTINFO_DEFAULT;
use crate::error::ctx;
use crate::file_system::FileOperations;

/// The description of one named test, as stored in the test database.
///
/// Read-only once loaded; every field is passed through to the reshaper
/// command line as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestDescriptor {
    /// The directory holding the input files of this test.
    pub input_dir: PathBuf,

    /// Glob patterns selecting input files under [Self::input_dir].
    ///
    /// The globs are passed to the reshaper verbatim, expansion is the
    /// reshaper's responsibility.
    pub input_globs: Vec<String>,

    /// The prefix of the output files, resolved against the run's output
    /// directory.
    pub output_prefix: String,

    /// The suffix of the output files.
    pub output_suffix: String,

    /// The metadata variable names, in declaration order.
    pub metadata: Vec<String>,
}

/// The JSON-backed database mapping test name to [TestDescriptor].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TestDatabase {
    #[serde(flatten)]
    tests: BTreeMap<String, TestDescriptor>,
}

impl TestDatabase {
    /// Load the database from `path`, or from `testinfo.json` in the
    /// working directory if no path was given.
    pub fn load(path: Option<&Path>, fs: &impl FileOperations) -> Result<Self> {
        let path = path.unwrap_or(Path::new(TESTINFO_DEFAULT));

        fs.try_read_json(path).with_context(ctx!(
          "Could not load the test database", ;
          "Provide its location with --testing_database",
        ))
    }

    /// Whether a test with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.tests.contains_key(name)
    }

    /// All defined test names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.tests.keys()
    }

    /// Look up the descriptor of a named test.
    pub fn describe(&self, name: &str) -> Result<&TestDescriptor> {
        let Some(descriptor) = self.tests.get(name) else {
            bailc!(
              "The test {name:?} is not defined", ;
              "The test database has no entry under this name", ;
              "Use --list to see the available tests",
            );
        };

        Ok(descriptor)
    }

    /// The number of defined tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the database defines no tests at all.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/testdb.rs"]
mod tests;
