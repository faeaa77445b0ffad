//! `make` and `list` command handlers.

use anyhow::{Context, Result};
use harbor::migration::{discover_migrations, Clock, Filesystem, MigrationCreator, MigrationFile};
use std::path::{Path, PathBuf};

/// Arguments of `harbor-migrate make`
#[derive(Debug, Clone)]
pub struct MakeOptions {
    /// Migration name, e.g. `create_users_table`
    pub name: String,
    /// Table the migration creates or modifies
    pub table: Option<String>,
    /// Use the create-table stub
    pub create: bool,
    /// Directory to write into
    pub path: PathBuf,
}

/// Write a new migration file and return its path
pub fn make<F: Filesystem, C: Clock>(
    creator: &MigrationCreator<F, C>,
    options: &MakeOptions,
) -> Result<PathBuf> {
    if options.create && options.table.is_none() {
        log::warn!("--create has no effect without --table; using the blank stub");
    }

    creator
        .create(
            &options.name,
            &options.path,
            options.table.as_deref(),
            options.create,
        )
        .with_context(|| {
            format!(
                "Failed to create migration '{}' in {}",
                options.name,
                options.path.display()
            )
        })
}

/// Migrations in `dir`, oldest first
pub fn list(dir: &Path, extension: &str) -> Result<Vec<MigrationFile>> {
    discover_migrations(dir, extension)
        .with_context(|| format!("Failed to list migrations in {}", dir.display()))
}
