//! # Storage Layer
//!
//! The [`ReportStore`] trait covers the handful of filesystem primitives the
//! report command needs, so the command can be tested without touching disk.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real filesystem. Relative paths resolve against a
//!   base directory (the working directory in production).
//! - [`memory::InMemoryStore`]: HashMap-backed, for tests. Can simulate write
//!   failures.
//!
//! ## Atomicity
//!
//! `copy_file` and `write_file` must never leave a partially written target
//! behind: content goes to a temporary file next to the target and is renamed
//! into place.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait ReportStore {
    /// True if `path` exists, whatever it is. Missing paths are `Ok(false)`;
    /// lookup failures such as permission errors are `Err`.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// True if `path` is a regular file. Missing paths are `Ok(false)`.
    fn is_file(&self, path: &Path) -> Result<bool>;

    /// Create `dir` and any missing parents. Existing directories are fine.
    fn ensure_dir(&mut self, dir: &Path) -> Result<()>;

    /// Copy `from` to `to` byte for byte, returning the number of bytes copied.
    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<u64>;

    /// Write `bytes` to `to`, replacing any existing file.
    fn write_file(&mut self, to: &Path, bytes: &[u8]) -> Result<()>;
}
