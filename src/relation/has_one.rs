//! One-to-one relation keyed by a foreign key on the related table.

use crate::model::Model;
use crate::query::{ClauseTag, Predicate, QueryBuilder, WhereClause};
use crate::relation::traits::Relation;
use sea_query::Value;

/// Has-one relation: `related.foreign_key = parent.primary_key`
///
/// Constraints are not added on construction; call
/// [`Relation::add_constraints`] or [`Relation::add_eager_constraints`]
/// depending on how the relation is being loaded.
///
/// # Example
///
/// ```
/// use harbor::{HasOne, Model, QueryBuilder, Relation};
/// use sea_query::Value;
///
/// struct User {
///     id: i64,
/// }
///
/// impl Model for User {
///     fn table_name(&self) -> &'static str {
///         "users"
///     }
///
///     fn primary_key_value(&self) -> Value {
///         self.id.into()
///     }
/// }
///
/// let user = User { id: 42 };
/// let mut profile = HasOne::new(QueryBuilder::table("profiles"), &user, "user_id");
/// profile.add_constraints();
///
/// assert_eq!(
///     profile.query().to_sql(),
///     r#"SELECT * FROM "profiles" WHERE "user_id" = 42"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HasOne {
    query: QueryBuilder,
    foreign_key: String,
    local_key: String,
    parent_key: Value,
}

impl HasOne {
    /// Create a relation keyed on the parent's primary key
    pub fn new<P: Model + ?Sized>(
        query: QueryBuilder,
        parent: &P,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self {
            query,
            foreign_key: foreign_key.into(),
            local_key: parent.primary_key().to_string(),
            parent_key: parent.primary_key_value(),
        }
    }

    /// Foreign key column on the related table
    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    /// Key column on the parent table, the parent's primary key
    pub fn local_key(&self) -> &str {
        &self.local_key
    }

    /// Value of the parent's key
    pub fn parent_key(&self) -> &Value {
        &self.parent_key
    }
}

impl Relation for HasOne {
    fn query(&self) -> &QueryBuilder {
        &self.query
    }

    fn query_mut(&mut self) -> &mut QueryBuilder {
        &mut self.query
    }

    fn add_constraints(&mut self) {
        self.query.push_where(
            ClauseTag::RelationKey,
            Predicate::eq(self.foreign_key.clone(), self.parent_key.clone()),
        );
    }

    fn add_eager_constraints<M: Model>(&mut self, parents: &[M]) {
        let mut keys: Vec<Value> = Vec::with_capacity(parents.len());
        for parent in parents {
            let key = parent.primary_key_value();
            // Avoid duplicates; Value is not Hash without extra features
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        self.query.push_where(
            ClauseTag::RelationKey,
            Predicate::is_in(self.foreign_key.clone(), keys),
        );
    }

    fn get_and_reset_wheres(&mut self) -> Vec<WhereClause> {
        self.query.take_tagged(ClauseTag::RelationKey)
    }

    fn into_query(self) -> QueryBuilder {
        self.query
    }
}
