//! Schema - collects the DDL a migration produces

use sea_query::{
    ColumnDef, DynIden, PostgresQueryBuilder, Table, TableAlterStatement, TableCreateStatement,
    TableDropStatement,
};

/// Collects schema statements issued by a migration, rendered as PostgreSQL
///
/// Running the statements against a database is up to the caller.
///
/// # Example
///
/// ```
/// use harbor::migration::Schema;
/// use sea_query::ColumnDef;
///
/// let mut schema = Schema::new();
/// schema.create("flights", |table| {
///     table.id();
///     table.column(ColumnDef::new("name").string().not_null());
/// });
///
/// assert_eq!(schema.statements().len(), 1);
/// assert!(schema.statements()[0].starts_with(r#"CREATE TABLE "flights""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    statements: Vec<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a blueprint
    pub fn create(&mut self, table: &str, build: impl FnOnce(&mut Blueprint)) -> &mut Self {
        let mut blueprint = Blueprint::new(table);
        build(&mut blueprint);

        let mut statement = Table::create();
        statement.table(DynIden::from(table.to_string()));
        for column in blueprint.columns {
            statement.col(column);
        }
        self.create_table(statement)
    }

    /// Modify an existing table from a blueprint
    ///
    /// Nothing is recorded when the blueprint is left empty.
    pub fn table(&mut self, table: &str, build: impl FnOnce(&mut Blueprint)) -> &mut Self {
        let mut blueprint = Blueprint::new(table);
        build(&mut blueprint);

        if blueprint.is_empty() {
            return self;
        }

        let mut statement = Table::alter();
        statement.table(DynIden::from(table.to_string()));
        for column in blueprint.columns {
            statement.add_column(column);
        }
        for column in blueprint.dropped {
            statement.drop_column(DynIden::from(column));
        }
        self.alter_table(statement)
    }

    /// Drop a table
    pub fn drop(&mut self, table: &str) -> &mut Self {
        self.drop_table(Table::drop().table(DynIden::from(table.to_string())).to_owned())
    }

    /// Drop a table if it exists
    pub fn drop_if_exists(&mut self, table: &str) -> &mut Self {
        self.drop_table(
            Table::drop()
                .table(DynIden::from(table.to_string()))
                .if_exists()
                .to_owned(),
        )
    }

    pub fn create_table(&mut self, statement: TableCreateStatement) -> &mut Self {
        self.push(statement.build(PostgresQueryBuilder))
    }

    pub fn alter_table(&mut self, statement: TableAlterStatement) -> &mut Self {
        self.push(statement.build(PostgresQueryBuilder))
    }

    pub fn drop_table(&mut self, statement: TableDropStatement) -> &mut Self {
        self.push(statement.build(PostgresQueryBuilder))
    }

    /// Record raw SQL
    pub fn raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push(sql.into())
    }

    /// Statements in the order they were issued
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }

    fn push(&mut self, sql: String) -> &mut Self {
        log::debug!("schema: {}", sql);
        self.statements.push(sql);
        self
    }
}

/// Column changes for one table
#[derive(Debug, Clone)]
pub struct Blueprint {
    table: String,
    columns: Vec<ColumnDef>,
    dropped: Vec<String>,
}

impl Blueprint {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// Table the blueprint applies to
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Add a column
    pub fn column(&mut self, column: &mut ColumnDef) -> &mut Self {
        self.columns.push(column.clone());
        self
    }

    /// Auto-incrementing `id` primary key
    pub fn id(&mut self) -> &mut Self {
        self.column(
            ColumnDef::new("id")
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
    }

    /// Nullable `created_at` and `updated_at` columns
    pub fn timestamps(&mut self) -> &mut Self {
        self.column(ColumnDef::new("created_at").timestamp().null());
        self.column(ColumnDef::new("updated_at").timestamp().null())
    }

    /// Drop a column (only meaningful in [`Schema::table`])
    pub fn drop_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.dropped.push(column.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.dropped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_blueprint() {
        let mut schema = Schema::new();
        schema.create("users", |table| {
            table.id();
            table.column(ColumnDef::new("email").string().not_null());
            table.timestamps();
        });

        let sql = &schema.statements()[0];
        assert!(sql.starts_with(r#"CREATE TABLE "users""#), "{sql}");
        assert!(sql.contains(r#""id""#), "{sql}");
        assert!(sql.contains(r#""email" varchar"#), "{sql}");
        assert!(sql.contains(r#""created_at""#), "{sql}");
        assert!(sql.contains(r#""updated_at""#), "{sql}");
    }

    #[test]
    fn test_table_adds_and_drops_columns() {
        let mut schema = Schema::new();
        schema.table("users", |table| {
            table.column(ColumnDef::new("votes").integer().null());
            table.drop_column("nickname");
        });

        let sql = &schema.statements()[0];
        assert!(sql.starts_with(r#"ALTER TABLE "users""#), "{sql}");
        assert!(sql.contains(r#"ADD COLUMN "votes""#), "{sql}");
        assert!(sql.contains(r#"DROP COLUMN "nickname""#), "{sql}");
    }

    #[test]
    fn test_empty_table_blueprint_records_nothing() {
        // EDGE CASE: an untouched update stub must not emit an empty ALTER TABLE
        let mut schema = Schema::new();
        schema.table("users", |_table| {});
        assert!(schema.statements().is_empty());
    }

    #[test]
    fn test_drop_statements() {
        let mut schema = Schema::new();
        schema.drop("users").drop_if_exists("posts").raw("SELECT 1");
        assert_eq!(
            schema.into_statements(),
            vec![
                r#"DROP TABLE "users""#.to_string(),
                r#"DROP TABLE IF EXISTS "posts""#.to_string(),
                "SELECT 1".to_string(),
            ]
        );
    }
}
