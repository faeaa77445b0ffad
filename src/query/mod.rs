//! Query builder used by relations.
//!
//! A [`QueryBuilder`] keeps its where-clauses as an ordered list of
//! [`WhereClause`]s. Each clause carries a [`ClauseTag`] naming the component
//! that added it, so relations can strip exactly their own constraints without
//! depending on clause position. Rendering to SQL goes through SeaQuery.

pub mod builder;
pub mod clause;

#[doc(inline)]
pub use builder::QueryBuilder;
#[doc(inline)]
pub use clause::{ClauseTag, Predicate, WhereClause};
