//! The one-line `VERSION` file.
//!
//! Both operations read and/or write the same file: one line, either
//! encoding, newline-terminated. Writes are whole-file overwrites and happen
//! only after a version string has been finalized, so a failed invocation
//! never leaves partial state behind. No locking; concurrent invocations
//! race and the last writer wins.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::Config;

/// Default version file name, resolved against the working directory.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Errors from version-file I/O.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file we tried to read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file we tried to write.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Handle on the version file.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: Utf8PathBuf,
}

impl VersionStore {
    /// Open a store at an explicit path.
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Resolve the store path from config, relative to the working directory.
    ///
    /// Uses `version_file` from config when set (absolute paths taken as-is),
    /// else `VERSION` in `cwd`.
    pub fn resolve(cwd: &Utf8Path, config: &Config) -> Self {
        let file = config
            .version_file
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_VERSION_FILE));
        let path = if file.is_absolute() {
            file
        } else {
            cwd.join(file)
        };
        Self { path }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read the file and return its content trimmed to the version line.
    pub fn read_line(&self) -> StoreResult<String> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(raw.trim().to_string())
    }

    /// Overwrite the file with `line` followed by a newline.
    #[instrument(skip(self), fields(path = %self.path))]
    pub fn write_line(&self, line: &str) -> StoreResult<()> {
        fs::write(&self.path, format!("{line}\n")).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(line, "wrote version file");
        Ok(())
    }
}
