//! Migration system for Harbor
//!
//! This module provides:
//! - [`MigrationCreator`]: writes new `YYYY_MM_DD_HHMMSS_<name>.rs` files from stubs
//! - [`Filesystem`] and [`Clock`]: injectable collaborators of the creator
//! - [`discover_migrations`]: lists existing migration files, oldest first
//! - [`Migration`] and [`Schema`]: the trait generated files implement
//!
//! # Example
//!
//! ```rust,no_run
//! use harbor::migration::MigrationCreator;
//!
//! let creator = MigrationCreator::local();
//! let path = creator.create("create_users_table", "migrations", Some("users"), true)?;
//! println!("Created {}", path.display());
//! # Ok::<(), harbor::MigrationError>(())
//! ```

pub mod clock;
pub mod creator;
pub mod error;
pub mod file;
pub mod filesystem;
pub mod migration;
pub mod schema;
pub mod stub;

pub use clock::{Clock, FixedClock, SystemClock};
pub use creator::{default_stub_path, MigrationCreator, DATE_PREFIX_FORMAT, DEFAULT_EXTENSION};
pub use error::MigrationError;
pub use file::{discover_migrations, MigrationFile};
pub use filesystem::{Filesystem, LocalFilesystem, MemoryFilesystem};
pub use migration::Migration;
pub use schema::{Blueprint, Schema};
pub use stub::{class_name, populate, StubKind};
