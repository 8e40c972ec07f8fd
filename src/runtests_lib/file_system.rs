use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;
use serde::de::DeserializeOwned;

use crate::error::ctx;

/// Interactor with the actual physical file system.
#[derive(Clone, Copy, Debug)]
pub struct FileSystemInteractor {
    /// If true this will not write nor store any state to the file system.
    pub dry_run: bool,
}

/// This defines all interactions of the harness with the filesystem.
pub trait FileOperations {
    /// Read a file into raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a file into a utf8 string.
    fn read_utf8(&self, path: &Path) -> Result<String>;

    /// Try to deserialize a json file into a structure `T`.
    fn try_read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T>;

    /// Write all bytes to a file, truncating it if it exists.
    fn write_bytes_truncate(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Write a [String] to a file, truncating it if it exists.
    fn write_utf8_truncate(&self, path: &Path, data: &str) -> Result<()>;

    /// Create a directory and all of its parents, without touching
    /// directories that already exist.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Make a file possible to execute.
    fn set_permissions(&self, path: &Path, perms: u32) -> Result<()>;

    /// Given a path try to canonicalize it.
    ///
    /// This will fail for files that do not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

impl FileOperations for FileSystemInteractor {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(ctx!(
          "Could not read the file {path:?}", ;
          "Ensure that the file exists and you have permissions to access it",
        ))
    }

    fn read_utf8(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?).with_context(ctx!(
          "{path:?} is not valid UTF-8", ;
          "The file doesn't seem to be human readable?",
        ))
    }

    fn try_read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        serde_json::from_str::<T>(&self.read_utf8(path)?).with_context(ctx!(
          "Could not deserialize json file {path:?}", ;
          "Ensure that the file is valid json",
        ))
    }

    fn write_utf8_truncate(&self, path: &Path, data: &str) -> Result<()> {
        self.write_bytes_truncate(path, data.as_bytes())
    }

    fn write_bytes_truncate(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if self.dry_run {
            debug!("Would have written to {path:?} (dry)");
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                trace!("Creating directories for {:?}", parent);

                fs::create_dir_all(parent).with_context(ctx!(
                  "Could not create parent directories for {parent:?}", ;
                  "Ensure that you have sufficient permissions",
                ))?;
            }
        }

        fs::write(path, bytes).with_context(ctx!(
          "Could not write to the file {path:?}", ;
          "Ensure that you have permissions to write it",
        ))?;

        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.dry_run {
            debug!("Would have created {path:?} (dry)");
            return Ok(());
        }

        fs::create_dir_all(path).with_context(ctx!(
           "Could not create {path:?}", ;
           "Ensure that you have sufficient permissions",
        ))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize().with_context(ctx!(
          "Could not canonicalize {path:?}", ;
          "Ensure that your path is valid",
        ))
    }

    fn set_permissions(&self, path: &Path, perms: u32) -> Result<()> {
        if self.dry_run {
            debug!("Would have made {path:?} executable (dry)");
            return Ok(());
        }

        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, Permissions::from_mode(perms)).with_context(ctx!(
              "Could not make {path:?} executable", ;
             "Ensure that you have sufficient permissions",
            ))
        }
        #[cfg(not(unix))]
        {
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "tests/file_system.rs"]
mod tests;
