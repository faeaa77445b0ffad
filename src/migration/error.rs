//! Migration-specific error types

use std::io;
use std::path::PathBuf;

/// Migration-specific errors
#[derive(Debug)]
pub enum MigrationError {
    /// Stub template could not be read
    StubNotFound { path: PathBuf, source: io::Error },
    /// Generated migration could not be written
    WriteFailure { path: PathBuf, source: io::Error },
    /// Migrations directory does not exist
    DirectoryNotFound(PathBuf),
    /// Invalid migration file name
    InvalidFormat(String),
    /// Other IO error while scanning migrations
    Io(io::Error),
}

impl std::fmt::Display for MigrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrationError::StubNotFound { path, source } => {
                write!(f, "Migration stub not found: {} ({})", path.display(), source)
            }
            MigrationError::WriteFailure { path, source } => {
                write!(
                    f,
                    "Failed to write migration file {}: {}\n\
                     Suggestion: Ensure the migrations directory exists and is writable",
                    path.display(),
                    source
                )
            }
            MigrationError::DirectoryNotFound(path) => {
                write!(f, "Migrations directory not found: {}", path.display())
            }
            MigrationError::InvalidFormat(msg) => write!(f, "Invalid migration format: {}", msg),
            MigrationError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for MigrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MigrationError::StubNotFound { source, .. }
            | MigrationError::WriteFailure { source, .. } => Some(source),
            MigrationError::Io(e) => Some(e),
            MigrationError::DirectoryNotFound(_) | MigrationError::InvalidFormat(_) => None,
        }
    }
}

impl From<io::Error> for MigrationError {
    fn from(error: io::Error) -> Self {
        MigrationError::Io(error)
    }
}
