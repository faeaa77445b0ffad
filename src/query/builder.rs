//! Tagged where-clause query builder.

use super::clause::{ClauseTag, Predicate, WhereClause};
use sea_query::{Asterisk, DynIden, PostgresQueryBuilder, Query, SelectStatement, Value};

/// Builder for `SELECT * FROM <table> WHERE ...` queries
///
/// Clauses are kept in insertion order and joined with `AND` when rendered.
///
/// # Example
///
/// ```
/// use harbor::QueryBuilder;
///
/// let mut query = QueryBuilder::table("images");
/// query.where_eq("position", 1);
///
/// assert_eq!(query.wheres().len(), 1);
/// assert_eq!(
///     query.to_sql(),
///     r#"SELECT * FROM "images" WHERE "position" = 1"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    table: String,
    wheres: Vec<WhereClause>,
}

impl QueryBuilder {
    /// Create a builder selecting from `table`
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            wheres: Vec::new(),
        }
    }

    /// Table the query selects from
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Add a caller-owned `column = value` clause
    pub fn where_eq(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.push_where(ClauseTag::Caller, Predicate::eq(column, value))
    }

    /// Add a caller-owned `column IN (values)` clause
    pub fn where_in<V, I>(&mut self, column: impl Into<String>, values: I) -> &mut Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.push_where(ClauseTag::Caller, Predicate::is_in(column, values))
    }

    /// Add a clause owned by `tag`
    pub fn push_where(&mut self, tag: ClauseTag, predicate: Predicate) -> &mut Self {
        log::debug!(
            "query on {}: adding {:?} clause on {}",
            self.table,
            tag,
            predicate.column()
        );
        self.wheres.push(WhereClause::new(tag, predicate));
        self
    }

    /// Clauses in insertion order
    pub fn wheres(&self) -> &[WhereClause] {
        &self.wheres
    }

    /// Remove the first clause owned by `tag`, if any
    pub fn remove_first_tagged(&mut self, tag: ClauseTag) -> Option<WhereClause> {
        let index = self.wheres.iter().position(|clause| clause.tag == tag)?;
        Some(self.wheres.remove(index))
    }

    /// Remove and return every clause owned by `tag`, preserving order
    ///
    /// Clauses owned by other tags keep their relative order.
    pub fn take_tagged(&mut self, tag: ClauseTag) -> Vec<WhereClause> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.wheres)
            .into_iter()
            .partition(|clause| clause.tag == tag);
        self.wheres = kept;
        taken
    }

    /// Build the SeaQuery select statement
    pub fn to_statement(&self) -> SelectStatement {
        let mut statement = Query::select();
        statement
            .column(Asterisk)
            .from(DynIden::from(self.table.clone()));
        for clause in &self.wheres {
            statement.and_where(clause.predicate.to_expr());
        }
        statement
    }

    /// Render as PostgreSQL with values inlined
    pub fn to_sql(&self) -> String {
        self.to_statement().to_string(PostgresQueryBuilder)
    }
}
