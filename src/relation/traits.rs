//! Core trait shared by relations.

use crate::model::Model;
use crate::query::{QueryBuilder, WhereClause};

/// Constraint lifecycle of a relation's query
///
/// A relation is either bound to a single parent ([`add_constraints`]) or to a
/// batch of parents for eager loading ([`add_eager_constraints`]), never both.
///
/// [`add_constraints`]: Relation::add_constraints
/// [`add_eager_constraints`]: Relation::add_eager_constraints
pub trait Relation {
    /// Query against the related table
    fn query(&self) -> &QueryBuilder;

    /// Mutable access for callers adding their own clauses
    fn query_mut(&mut self) -> &mut QueryBuilder;

    /// Constrain the query to the single parent the relation was built for
    fn add_constraints(&mut self);

    /// Constrain the query to a batch of parents
    fn add_eager_constraints<M: Model>(&mut self, parents: &[M]);

    /// Remove the clauses this relation added and return them
    ///
    /// Clauses added by application code stay on the query.
    fn get_and_reset_wheres(&mut self) -> Vec<WhereClause>;

    /// Consume the relation, keeping its query
    fn into_query(self) -> QueryBuilder
    where
        Self: Sized;
}
