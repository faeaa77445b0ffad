//! Migration trait definition

use super::schema::Schema;

/// Trait that all migrations must implement
///
/// Generated migration files define a struct implementing this trait with
/// `up()` and `down()` methods.
pub trait Migration: Send + Sync {
    /// Human-readable identifier, defaults to the type name
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Apply the migration (forward migration)
    fn up(&self, schema: &mut Schema);

    /// Rollback the migration (reverse migration)
    fn down(&self, schema: &mut Schema);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CreateFlightsTable;

    impl Migration for CreateFlightsTable {
        fn up(&self, schema: &mut Schema) {
            schema.create("flights", |table| {
                table.id();
                table.timestamps();
            });
        }

        fn down(&self, schema: &mut Schema) {
            schema.drop("flights");
        }
    }

    #[test]
    fn test_up_and_down_collect_statements() {
        let migration = CreateFlightsTable;
        assert!(migration.name().ends_with("CreateFlightsTable"));

        let mut schema = Schema::new();
        migration.up(&mut schema);
        migration.down(&mut schema);

        let statements = schema.into_statements();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with(r#"CREATE TABLE "flights""#));
        assert_eq!(statements[1], r#"DROP TABLE "flights""#);
    }
}
