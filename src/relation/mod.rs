//! Relation module for one-to-one relationships.
//!
//! - [`HasOne`]: the related table stores the parent's key in a foreign key column.
//! - [`MorphOne`]: a has-one whose related table can belong to several parent
//!   types, told apart by a `<name>_type` discriminator column.
//! - [`MorphMap`]: maps Rust model types to the discriminator strings stored
//!   in the database.
//!
//! # Architecture
//!
//! A relation owns a [`QueryBuilder`](crate::query::QueryBuilder) for the
//! related table. Constraint methods add tagged where-clauses to it and
//! [`Relation::get_and_reset_wheres`] strips exactly those clauses again,
//! leaving anything application code added in place.
//!
//! # Example
//!
//! ```
//! use harbor::{Model, MorphOne, QueryBuilder, Relation};
//! use sea_query::Value;
//!
//! struct Post {
//!     id: i64,
//! }
//!
//! impl Model for Post {
//!     fn table_name(&self) -> &'static str {
//!         "posts"
//!     }
//!
//!     fn primary_key_value(&self) -> Value {
//!         self.id.into()
//!     }
//!
//!     fn morph_class(&self) -> String {
//!         "post".to_string()
//!     }
//! }
//!
//! let post = Post { id: 3 };
//! let mut image = MorphOne::new(QueryBuilder::table("images"), &post, "imageable");
//! image.add_constraints();
//!
//! assert_eq!(image.morph_type(), "imageable_type");
//! assert_eq!(image.foreign_key(), "imageable_id");
//! assert_eq!(image.query().wheres().len(), 2);
//! ```

pub mod has_one;
pub mod morph_map;
pub mod morph_one;
pub mod traits;

#[doc(inline)]
pub use has_one::HasOne;
#[doc(inline)]
pub use morph_map::MorphMap;
#[doc(inline)]
pub use morph_one::MorphOne;
#[doc(inline)]
pub use traits::Relation;
