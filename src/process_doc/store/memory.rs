use super::ReportStore;
use crate::error::{ProcessError, Result};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store for testing. Paths are used verbatim as keys.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, e.g. an input document.
    pub fn insert_file(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    pub fn read(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    /// Make every subsequent write fail, for error-path tests.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self, to: &Path) -> Result<()> {
        if self.simulate_write_error {
            return Err(ProcessError::Store("Simulated write error".to_string()));
        }
        match to.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) => {
                Err(ProcessError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory {} does not exist", parent.display()),
                )))
            }
            _ => Ok(()),
        }
    }
}

impl ReportStore for InMemoryStore {
    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.contains_key(path) || self.dirs.contains(path))
    }

    fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(self.files.contains_key(path))
    }

    fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
        if self.files.contains_key(dir) {
            return Err(ProcessError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", dir.display()),
            )));
        }
        for ancestor in dir.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<u64> {
        let bytes = self.files.get(from).cloned().ok_or_else(|| {
            ProcessError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", from.display()),
            ))
        })?;
        self.check_writable(to)?;

        let len = bytes.len() as u64;
        self.files.insert(to.to_path_buf(), bytes);
        Ok(len)
    }

    fn write_file(&mut self, to: &Path, bytes: &[u8]) -> Result<()> {
        self.check_writable(to)?;
        self.files.insert(to.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_registers_ancestors() {
        let mut store = InMemoryStore::new();
        store.ensure_dir(Path::new("public/output_1")).unwrap();

        assert!(store.has_dir(Path::new("public")));
        assert!(store.has_dir(Path::new("public/output_1")));
    }

    #[test]
    fn test_write_requires_parent_dir() {
        let mut store = InMemoryStore::new();
        let res = store.write_file(Path::new("public/output_1/r.pdf"), b"x");
        assert!(res.is_err());

        store.ensure_dir(Path::new("public/output_1")).unwrap();
        store
            .write_file(Path::new("public/output_1/r.pdf"), b"x")
            .unwrap();
        assert_eq!(store.read(Path::new("public/output_1/r.pdf")), Some(&b"x"[..]));
    }

    #[test]
    fn test_copy_missing_source() {
        let mut store = InMemoryStore::new();
        let err = store
            .copy_file(Path::new("nope.pdf"), Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(err, ProcessError::Io(_)));
        assert!(!store.exists(Path::new("out.pdf")).unwrap());
    }

    #[test]
    fn test_simulated_write_error() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = store.write_file(Path::new("out.pdf"), b"x").unwrap_err();
        assert!(matches!(err, ProcessError::Store(_)));
    }
}
