//! Where-clause descriptors.

use sea_query::{DynIden, Expr, ExprTrait, Value};

/// Owner of a where-clause.
///
/// Relations tag the predicates they add so that they can later remove them
/// by owner instead of by position in the clause list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseTag {
    /// Added by application code through the public builder methods
    Caller,
    /// Foreign key constraint added by a has-one relation
    RelationKey,
    /// Discriminator constraint added by a polymorphic relation
    MorphType,
}

/// A single filter on a query
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column = value`
    Eq { column: String, value: Value },
    /// `column IN (values)`
    In { column: String, values: Vec<Value> },
}

impl Predicate {
    /// Equality predicate
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// In-set predicate
    pub fn is_in<V, I>(column: impl Into<String>, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Predicate::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Column the predicate filters on
    pub fn column(&self) -> &str {
        match self {
            Predicate::Eq { column, .. } | Predicate::In { column, .. } => column,
        }
    }

    /// Convert to a SeaQuery expression.
    ///
    /// An empty `IN` list is rendered by SeaQuery as an always-false condition.
    pub fn to_expr(&self) -> Expr {
        match self {
            Predicate::Eq { column, value } => {
                Expr::col(DynIden::from(column.clone())).eq(value.clone())
            }
            Predicate::In { column, values } => {
                Expr::col(DynIden::from(column.clone())).is_in(values.clone())
            }
        }
    }
}

/// A predicate together with the component that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub tag: ClauseTag,
    pub predicate: Predicate,
}

impl WhereClause {
    pub fn new(tag: ClauseTag, predicate: Predicate) -> Self {
        Self { tag, predicate }
    }

    /// Column the clause filters on
    pub fn column(&self) -> &str {
        self.predicate.column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_eq_column() {
        let predicate = Predicate::eq("imageable_id", 1i64);
        assert_eq!(predicate.column(), "imageable_id");
        assert_eq!(
            predicate,
            Predicate::Eq {
                column: "imageable_id".to_string(),
                value: Value::from(1i64),
            }
        );
    }

    #[test]
    fn test_predicate_is_in_collects_values() {
        let predicate = Predicate::is_in("imageable_id", vec![1i64, 2, 3]);
        match predicate {
            Predicate::In { column, values } => {
                assert_eq!(column, "imageable_id");
                assert_eq!(values.len(), 3);
                assert_eq!(values[2], Value::from(3i64));
            }
            other => panic!("expected In predicate, got {other:?}"),
        }
    }

    #[test]
    fn test_where_clause_column_delegates_to_predicate() {
        let clause = WhereClause::new(ClauseTag::MorphType, Predicate::eq("imageable_type", "post"));
        assert_eq!(clause.column(), "imageable_type");
        assert_eq!(clause.tag, ClauseTag::MorphType);
    }
}
