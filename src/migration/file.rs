//! Migration file discovery and parsing

use crate::migration::MigrationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}_\d{2}_\d{2}_\d{6})_(.+)\.([A-Za-z0-9]+)$")
        .expect("migration file name pattern is valid")
});

/// Represents a discovered migration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Path to the migration file
    pub path: PathBuf,

    /// Creation timestamp prefix (`YYYY_MM_DD_HHMMSS`)
    pub timestamp: String,

    /// Human-readable migration name
    pub name: String,

    /// File extension without the dot
    pub extension: String,
}

impl MigrationFile {
    /// Parse a migration file name into `(timestamp, name, extension)`
    ///
    /// Expected format: `{YYYY_MM_DD_HHMMSS}_{name}.{ext}`
    ///
    /// # Example
    /// - `2024_01_20_120000_create_users_table.rs` → timestamp: `2024_01_20_120000`,
    ///   name: `create_users_table`, extension: `rs`
    pub fn parse_filename(filename: &str) -> Result<(String, String, String), MigrationError> {
        let caps = FILENAME_RE.captures(filename).ok_or_else(|| {
            MigrationError::InvalidFormat(format!(
                "Migration file name '{}' does not match expected pattern: {{YYYY_MM_DD_HHMMSS}}_{{name}}.{{ext}}",
                filename
            ))
        })?;

        Ok((
            caps[1].to_string(),
            caps[2].to_string(),
            caps[3].to_string(),
        ))
    }

    /// Build from a path, parsing its file name
    pub fn from_path(path: PathBuf) -> Result<Self, MigrationError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                MigrationError::InvalidFormat(format!("Invalid filename: {}", path.display()))
            })?;

        let (timestamp, name, extension) = Self::parse_filename(filename)?;
        Ok(Self {
            path,
            timestamp,
            name,
            extension,
        })
    }

    /// File name without directory, e.g. `2024_01_20_120000_create_users_table.rs`
    pub fn file_name(&self) -> String {
        format!("{}_{}.{}", self.timestamp, self.name, self.extension)
    }
}

/// Discover all migration files in a directory
///
/// Scans `migrations_dir` for files with the given extension, parses their
/// names and returns them oldest first. Timestamps are zero-padded, so
/// sorting by prefix is chronological.
///
/// # Errors
///
/// Returns errors if:
/// - The directory doesn't exist or is not a directory
/// - The directory can't be read
///
/// Files with the extension whose names are not migration names (e.g. `mod.rs`)
/// are skipped.
pub fn discover_migrations(
    migrations_dir: &Path,
    extension: &str,
) -> Result<Vec<MigrationFile>, MigrationError> {
    if !migrations_dir.is_dir() {
        return Err(MigrationError::DirectoryNotFound(migrations_dir.to_path_buf()));
    }

    let mut migrations = Vec::new();

    for entry in fs::read_dir(migrations_dir)? {
        let path = entry?.path();

        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(extension) {
            continue;
        }

        match MigrationFile::from_path(path) {
            Ok(migration) => migrations.push(migration),
            Err(MigrationError::InvalidFormat(reason)) => {
                log::debug!("Skipping non-migration file: {}", reason);
            }
            Err(e) => return Err(e),
        }
    }

    migrations.sort_by(|a, b| (&a.timestamp, &a.name).cmp(&(&b.timestamp, &b.name)));
    log::debug!(
        "Discovered {} migration(s) in {}",
        migrations.len(),
        migrations_dir.display()
    );

    Ok(migrations)
}
