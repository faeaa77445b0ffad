//! Filesystem abstraction used by the migration creator.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Read/write primitives the creator needs
pub trait Filesystem {
    /// Read a whole file as UTF-8
    ///
    /// Fails with [`io::ErrorKind::NotFound`] if `path` does not exist.
    fn get(&self, path: &Path) -> io::Result<String>;

    /// Create or overwrite `path` with `contents`
    ///
    /// Parent directories are not created.
    fn put(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`Filesystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn get(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn put(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// In-memory [`Filesystem`] that records every read and write
///
/// Useful for tests and dry runs.
///
/// # Example
///
/// ```
/// use harbor::migration::{Filesystem, MemoryFilesystem};
/// use std::path::Path;
///
/// let files = MemoryFilesystem::new().with_file("stubs/blank.stub", "{{class}}");
/// assert_eq!(files.get(Path::new("stubs/blank.stub")).unwrap(), "{{class}}");
///
/// files.put(Path::new("out.rs"), "CreateBar").unwrap();
/// assert_eq!(files.contents("out.rs").as_deref(), Some("CreateBar"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: Mutex<HashMap<PathBuf, String>>,
    reads: Mutex<Vec<PathBuf>>,
    writes: Mutex<Vec<PathBuf>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        lock(&self.files).insert(path.into(), contents.into());
        self
    }

    /// Current contents of `path`
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        lock(&self.files).get(path.as_ref()).cloned()
    }

    /// Paths passed to [`Filesystem::get`], in call order
    pub fn reads(&self) -> Vec<PathBuf> {
        lock(&self.reads).clone()
    }

    /// Paths passed to [`Filesystem::put`], in call order
    pub fn writes(&self) -> Vec<PathBuf> {
        lock(&self.writes).clone()
    }
}

impl Filesystem for MemoryFilesystem {
    fn get(&self, path: &Path) -> io::Result<String> {
        lock(&self.reads).push(path.to_path_buf());
        lock(&self.files).get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn put(&self, path: &Path, contents: &str) -> io::Result<()> {
        lock(&self.writes).push(path.to_path_buf());
        lock(&self.files).insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn get(&self, path: &Path) -> io::Result<String> {
        (**self).get(path)
    }

    fn put(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).put(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_filesystem_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");

        LocalFilesystem.put(&path, "hello").unwrap();
        assert_eq!(LocalFilesystem.get(&path).unwrap(), "hello");

        LocalFilesystem.put(&path, "overwritten").unwrap();
        assert_eq!(LocalFilesystem.get(&path).unwrap(), "overwritten");
    }

    #[test]
    fn test_local_filesystem_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFilesystem.get(&temp_dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_local_filesystem_missing_directory() {
        // EDGE CASE: parent directories are not created
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("file.txt");
        assert!(LocalFilesystem.put(&path, "x").is_err());
    }

    #[test]
    fn test_memory_filesystem_records_calls() {
        let files = MemoryFilesystem::new().with_file("a", "1");
        assert!(files.get(Path::new("a")).is_ok());
        assert_eq!(
            files.get(Path::new("b")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        files.put(Path::new("c"), "3").unwrap();

        assert_eq!(files.reads(), vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(files.writes(), vec![PathBuf::from("c")]);
        assert_eq!(files.contents("c").as_deref(), Some("3"));
    }
}
