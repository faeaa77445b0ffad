//! # Harbor
//!
//! Polymorphic relations and migration scaffolding for the Harbor ORM.
//!
//! - [`relation`]: has-one and polymorphic has-one ("morph one") relations that
//!   decorate a [`QueryBuilder`] with their constraints and strip them again.
//! - [`migration`]: stub-based migration file generation and discovery.
//! - [`config`]: settings loaded from `config/config.toml` and `HARBOR__*` env vars.

pub mod config;
pub mod migration;
pub mod model;
pub mod query;
pub mod relation;

pub use config::{HarborConfig, MigrationConfig};
pub use migration::{MigrationCreator, MigrationError};
pub use model::Model;
pub use query::{ClauseTag, Predicate, QueryBuilder, WhereClause};
pub use relation::{HasOne, MorphMap, MorphOne, Relation};
