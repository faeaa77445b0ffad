//! Polymorphic one-to-one relation.
//!
//! A morph-one relation lets one related table (say `images`) belong to
//! several parent tables (`posts`, `users`, ...). The related table stores the
//! parent's key in `<name>_id` and the parent's type in `<name>_type`.

use crate::model::Model;
use crate::query::{ClauseTag, Predicate, QueryBuilder, WhereClause};
use crate::relation::has_one::HasOne;
use crate::relation::morph_map::MorphMap;
use crate::relation::traits::Relation;
use sea_query::{DynIden, Expr, InsertStatement, Query, Value};

/// Has-one relation filtered by a type discriminator
///
/// Wraps a [`HasOne`] on `<morph_name>_id` and adds
/// `<morph_name>_type = <morph class>` after each of its constraint passes.
#[derive(Debug, Clone)]
pub struct MorphOne {
    inner: HasOne,
    morph_type: String,
    morph_class: String,
}

impl MorphOne {
    /// Create the relation for `parent`, using [`Model::morph_class`] as the
    /// discriminator
    pub fn new<P: Model + ?Sized>(query: QueryBuilder, parent: &P, morph_name: &str) -> Self {
        Self::with_morph_class(query, parent, morph_name, parent.morph_class())
    }

    /// Create the relation for `parent`, resolving the discriminator through
    /// `morph_map`
    pub fn with_morph_map<P: Model + 'static>(
        query: QueryBuilder,
        parent: &P,
        morph_name: &str,
        morph_map: &MorphMap,
    ) -> Self {
        Self::with_morph_class(query, parent, morph_name, morph_map.class_of(parent))
    }

    fn with_morph_class<P: Model + ?Sized>(
        query: QueryBuilder,
        parent: &P,
        morph_name: &str,
        morph_class: String,
    ) -> Self {
        Self {
            inner: HasOne::new(query, parent, format!("{morph_name}_id")),
            morph_type: format!("{morph_name}_type"),
            morph_class,
        }
    }

    /// Discriminator column on the related table
    pub fn morph_type(&self) -> &str {
        &self.morph_type
    }

    /// Discriminator value of the parent
    pub fn morph_class(&self) -> &str {
        &self.morph_class
    }

    /// Foreign key column on the related table
    pub fn foreign_key(&self) -> &str {
        self.inner.foreign_key()
    }

    /// Value of the parent's key
    pub fn parent_key(&self) -> &Value {
        self.inner.parent_key()
    }

    fn add_morph_type_constraint(&mut self) {
        self.inner.query_mut().push_where(
            ClauseTag::MorphType,
            Predicate::eq(self.morph_type.clone(), self.morph_class.clone()),
        );
    }

    /// Build an `INSERT` for a new related record
    ///
    /// The foreign key and discriminator columns are set from the parent;
    /// values supplied for them in `attributes` are replaced.
    ///
    /// # Errors
    ///
    /// Returns SeaQuery's error if the column and value counts disagree.
    pub fn insert_related<C, V, I>(&self, attributes: I) -> Result<InsertStatement, sea_query::error::Error>
    where
        C: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (C, V)>,
    {
        let mut columns: Vec<DynIden> = Vec::new();
        let mut values: Vec<Expr> = Vec::new();

        for (column, value) in attributes {
            let column = column.into();
            if column == self.foreign_key() || column == self.morph_type {
                continue;
            }
            columns.push(DynIden::from(column));
            values.push(Expr::val(value.into()));
        }

        columns.push(DynIden::from(self.foreign_key().to_string()));
        values.push(Expr::val(self.parent_key().clone()));
        columns.push(DynIden::from(self.morph_type.clone()));
        values.push(Expr::val(self.morph_class.clone()));

        let mut statement = Query::insert();
        statement
            .into_table(DynIden::from(self.query().table_name().to_string()))
            .columns(columns)
            .values(values)?;
        Ok(statement)
    }
}

impl Relation for MorphOne {
    fn query(&self) -> &QueryBuilder {
        self.inner.query()
    }

    fn query_mut(&mut self) -> &mut QueryBuilder {
        self.inner.query_mut()
    }

    fn add_constraints(&mut self) {
        self.inner.add_constraints();
        self.add_morph_type_constraint();
    }

    fn add_eager_constraints<M: Model>(&mut self, parents: &[M]) {
        self.inner.add_eager_constraints(parents);
        self.add_morph_type_constraint();
    }

    /// Removes the discriminator clause(s), then the base key clause(s).
    ///
    /// The returned list starts with the discriminator clauses.
    fn get_and_reset_wheres(&mut self) -> Vec<WhereClause> {
        let mut removed = self.inner.query_mut().take_tagged(ClauseTag::MorphType);
        removed.extend(self.inner.get_and_reset_wheres());
        removed
    }

    fn into_query(self) -> QueryBuilder {
        self.inner.into_query()
    }
}
