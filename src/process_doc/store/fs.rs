use super::ReportStore;
use crate::error::{ProcessError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    base_dir: Option<PathBuf>,
}

impl FileStore {
    /// A store resolving relative paths against the process working directory.
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// A store resolving relative paths against `base_dir`.
    #[cfg(test)]
    pub(crate) fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn tmp_path_for(target: &Path) -> Result<PathBuf> {
        let parent = target.parent().ok_or_else(|| {
            ProcessError::Store(format!("No parent directory for {}", target.display()))
        })?;
        Ok(parent.join(format!(".report-{}.tmp", Uuid::new_v4())))
    }

    /// Move a finished temporary file into place, cleaning it up on failure.
    fn commit(tmp: &Path, target: &Path) -> Result<()> {
        if let Err(e) = fs::rename(tmp, target) {
            let _ = fs::remove_file(tmp);
            return Err(ProcessError::Io(e));
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for FileStore {
    fn exists(&self, path: &Path) -> Result<bool> {
        self.resolve(path).try_exists().map_err(ProcessError::Io)
    }

    fn is_file(&self, path: &Path) -> Result<bool> {
        match fs::metadata(self.resolve(path)) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ProcessError::Io(e)),
        }
    }

    fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
        let dir = self.resolve(dir);
        if !dir.is_dir() {
            fs::create_dir_all(&dir).map_err(ProcessError::Io)?;
        }
        Ok(())
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<u64> {
        let source = self.resolve(from);
        let target = self.resolve(to);

        // Atomic copy
        let tmp = Self::tmp_path_for(&target)?;
        let copied = match fs::copy(&source, &tmp) {
            Ok(n) => n,
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                return Err(ProcessError::Io(e));
            }
        };
        Self::commit(&tmp, &target)?;

        Ok(copied)
    }

    fn write_file(&mut self, to: &Path, bytes: &[u8]) -> Result<()> {
        let target = self.resolve(to);

        // Atomic write
        let tmp = Self::tmp_path_for(&target)?;
        if let Err(e) = fs::write(&tmp, bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(ProcessError::Io(e));
        }
        Self::commit(&tmp, &target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_base_dir(dir.path());
        (dir, store)
    }

    fn assert_no_tmp_files(dir: &Path) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let (dir, mut store) = setup();
        let nested = Path::new("public/output_1");

        store.ensure_dir(nested).unwrap();
        store.ensure_dir(nested).unwrap();

        assert!(dir.path().join(nested).is_dir());
    }

    #[test]
    fn test_write_file_replaces_content() {
        let (dir, mut store) = setup();
        let target = Path::new("report.pdf");

        store.write_file(target, b"first").unwrap();
        store.write_file(target, b"second").unwrap();

        assert_eq!(fs::read(dir.path().join(target)).unwrap(), b"second");
        assert_no_tmp_files(dir.path());
    }

    #[test]
    fn test_copy_file_is_byte_exact() {
        let (dir, mut store) = setup();
        let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        fs::write(dir.path().join("in.pdf"), &payload).unwrap();

        let n = store
            .copy_file(Path::new("in.pdf"), Path::new("out.pdf"))
            .unwrap();

        assert_eq!(n, payload.len() as u64);
        assert_eq!(fs::read(dir.path().join("out.pdf")).unwrap(), payload);
        assert_no_tmp_files(dir.path());
    }

    #[test]
    fn test_copy_missing_source_leaves_nothing() {
        let (dir, mut store) = setup();

        let err = store
            .copy_file(Path::new("missing.pdf"), Path::new("out.pdf"))
            .unwrap_err();

        assert!(matches!(err, ProcessError::Io(_)));
        assert!(!dir.path().join("out.pdf").exists());
        assert_no_tmp_files(dir.path());
    }

    #[test]
    fn test_is_file() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(store.is_file(Path::new("a.txt")).unwrap());
        assert!(!store.is_file(Path::new("sub")).unwrap());
        assert!(!store.is_file(Path::new("missing")).unwrap());
        assert!(store.exists(Path::new("sub")).unwrap());
        assert!(!store.exists(Path::new("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_reports_lookup_errors() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        // A regular file used as a directory is an error, not "missing".
        let err = store.exists(Path::new("a.txt/child")).unwrap_err();
        assert!(matches!(err, ProcessError::Io(_)));
    }

    #[test]
    fn test_absolute_paths_ignore_base_dir() {
        let (_dir, mut store) = setup();
        let other = TempDir::new().unwrap();
        let target = other.path().join("abs.pdf");

        store.write_file(&target, b"%PDF").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"%PDF");
    }
}
