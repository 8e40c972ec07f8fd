//! Code shared between the `runtests` binary and its tests.

/// Constant values.
pub mod constants;

/// The error handling for `runtests`.
pub mod error;

/// Common file operations.
pub mod file_system;

/// The run configuration resolved from the command line.
pub mod options;

/// The JSON-backed database of test descriptors.
pub mod testdb;
