//! Creates new migration files from stub templates.

use crate::config::MigrationConfig;
use crate::migration::clock::{Clock, SystemClock};
use crate::migration::error::MigrationError;
use crate::migration::filesystem::{Filesystem, LocalFilesystem};
use crate::migration::stub::{self, StubKind};
use std::path::{Path, PathBuf};

/// `strftime` format of the file name prefix: `YYYY_MM_DD_HHMMSS`
pub const DATE_PREFIX_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Extension of generated migration files
pub const DEFAULT_EXTENSION: &str = "rs";

/// Directory holding the bundled `blank`, `create` and `update` stubs
pub fn default_stub_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("migration")
        .join("stubs")
}

/// Writes timestamped migration files
///
/// The filesystem and clock are injected so tests can observe every read and
/// write and pin the timestamp.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use harbor::migration::{FixedClock, MemoryFilesystem, MigrationCreator};
///
/// let moment = NaiveDate::from_ymd_opt(2024, 1, 20)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let files = MemoryFilesystem::new().with_file("stubs/create.stub", "{{class}} {{table}}");
/// let creator = MigrationCreator::new(files, FixedClock(moment)).with_stub_path("stubs");
///
/// let path = creator
///     .create("create_users_table", "migrations", Some("users"), true)
///     .unwrap();
///
/// assert_eq!(
///     path.to_str(),
///     Some("migrations/2024_01_20_120000_create_users_table.rs")
/// );
/// assert_eq!(
///     creator.filesystem().contents(&path).as_deref(),
///     Some("CreateUsersTable users")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MigrationCreator<F = LocalFilesystem, C = SystemClock> {
    files: F,
    clock: C,
    stub_path: PathBuf,
    extension: String,
}

impl MigrationCreator {
    /// Creator writing to the local disk with the system clock
    pub fn local() -> Self {
        MigrationCreator::new(LocalFilesystem, SystemClock)
    }

    /// Local creator configured from `[migrations]` settings
    pub fn from_config(config: &MigrationConfig) -> Self {
        let creator = Self::local().with_extension(config.extension.clone());
        match &config.stub_path {
            Some(stub_path) => creator.with_stub_path(stub_path),
            None => creator,
        }
    }
}

impl<F: Filesystem, C: Clock> MigrationCreator<F, C> {
    pub fn new(files: F, clock: C) -> Self {
        Self {
            files,
            clock,
            stub_path: default_stub_path(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Read stubs from `stub_path` instead of the bundled directory
    pub fn with_stub_path(mut self, stub_path: impl Into<PathBuf>) -> Self {
        self.stub_path = stub_path.into();
        self
    }

    /// Extension of generated files, without the leading dot
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Create a new migration in `path`
    ///
    /// Picks the `blank` stub when `table` is `None`, otherwise `create` or
    /// `update` depending on `create`. An existing file at the target path is
    /// overwritten.
    ///
    /// # Returns
    ///
    /// The path of the written file
    ///
    /// # Errors
    ///
    /// - [`MigrationError::StubNotFound`] if the stub cannot be read; nothing is written
    /// - [`MigrationError::WriteFailure`] if the file cannot be written
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path)))]
    pub fn create(
        &self,
        name: &str,
        path: impl AsRef<Path>,
        table: Option<&str>,
        create: bool,
    ) -> Result<PathBuf, MigrationError> {
        let target = self.get_path(name, path.as_ref());
        let stub = self.get_stub(StubKind::select(table, create))?;
        let contents = stub::populate(&stub, name, table);

        self.files
            .put(&target, &contents)
            .map_err(|source| MigrationError::WriteFailure {
                path: target.clone(),
                source,
            })?;

        log::info!("Created migration {}", target.display());
        Ok(target)
    }

    /// Timestamp prefix for a migration created now
    pub fn date_prefix(&self) -> String {
        self.clock.now().format(DATE_PREFIX_FORMAT).to_string()
    }

    /// Directory stubs are read from
    pub fn stub_path(&self) -> &Path {
        &self.stub_path
    }

    /// Extension of generated files
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn filesystem(&self) -> &F {
        &self.files
    }

    fn get_stub(&self, kind: StubKind) -> Result<String, MigrationError> {
        let path = self.stub_path.join(kind.file_name());
        log::debug!("Loading {} stub from {}", kind, path.display());
        self.files
            .get(&path)
            .map_err(|source| MigrationError::StubNotFound { path, source })
    }

    fn get_path(&self, name: &str, path: &Path) -> PathBuf {
        path.join(format!("{}_{}.{}", self.date_prefix(), name, self.extension))
    }
}
