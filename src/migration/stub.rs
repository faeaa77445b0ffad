//! Migration stub selection and placeholder substitution.

use std::fmt;

/// Placeholder replaced with the migration's type name
pub const CLASS_PLACEHOLDER: &str = "{{class}}";

/// Placeholder replaced with the table name
pub const TABLE_PLACEHOLDER: &str = "{{table}}";

/// Extension of stub template files
pub const STUB_EXTENSION: &str = "stub";

/// The three migration templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubKind {
    /// No table given
    Blank,
    /// Creates a new table
    Create,
    /// Modifies an existing table
    Update,
}

impl StubKind {
    /// Pick the stub for a migration
    ///
    /// `create` only matters when a table is given.
    pub fn select(table: Option<&str>, create: bool) -> Self {
        match (table, create) {
            (None, _) => StubKind::Blank,
            (Some(_), true) => StubKind::Create,
            (Some(_), false) => StubKind::Update,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StubKind::Blank => "blank",
            StubKind::Create => "create",
            StubKind::Update => "update",
        }
    }

    /// File name inside the stub directory, e.g. `blank.stub`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_str(), STUB_EXTENSION)
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a migration name to a type name
///
/// Splits on `_`, `-` and whitespace and upper-cases the first letter of each
/// word; the rest of each word is kept as is, so already converted names come
/// back unchanged.
///
/// ```
/// use harbor::migration::class_name;
///
/// assert_eq!(class_name("create_users_table"), "CreateUsersTable");
/// assert_eq!(class_name("CreateUsersTable"), "CreateUsersTable");
/// ```
pub fn class_name(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Fill the placeholders of a stub
///
/// `{{class}}` is always replaced. `{{table}}` is only replaced when a table
/// is given; otherwise it is left untouched.
pub fn populate(stub: &str, name: &str, table: Option<&str>) -> String {
    let populated = stub.replace(CLASS_PLACEHOLDER, &class_name(name));
    match table {
        Some(table) => populated.replace(TABLE_PLACEHOLDER, table),
        None => populated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_stub() {
        assert_eq!(StubKind::select(None, false), StubKind::Blank);
        assert_eq!(StubKind::select(None, true), StubKind::Blank);
        assert_eq!(StubKind::select(Some("users"), true), StubKind::Create);
        assert_eq!(StubKind::select(Some("users"), false), StubKind::Update);
    }

    #[test]
    fn test_stub_file_names() {
        assert_eq!(StubKind::Blank.file_name(), "blank.stub");
        assert_eq!(StubKind::Create.file_name(), "create.stub");
        assert_eq!(StubKind::Update.file_name(), "update.stub");
        assert_eq!(StubKind::Update.to_string(), "update");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name("create_bar"), "CreateBar");
        assert_eq!(class_name("create_users_table"), "CreateUsersTable");
        assert_eq!(class_name("add-votes-to-users"), "AddVotesToUsers");
        assert_eq!(class_name("user"), "User");
    }

    #[test]
    fn test_class_name_is_idempotent() {
        for name in ["create_users_table", "add_votes", "x", "already_Pascal_case"] {
            let once = class_name(name);
            assert_eq!(class_name(&once), once);
        }
    }

    #[test]
    fn test_class_name_edge_cases() {
        // EDGE CASE: leading, trailing and repeated separators
        assert_eq!(class_name("_create__bar_"), "CreateBar");
        assert_eq!(class_name(""), "");
        assert_eq!(class_name("2024_fix"), "2024Fix");
    }

    #[test]
    fn test_populate_replaces_every_occurrence() {
        let stub = "{{class}} {{table}} {{class}} {{table}}";
        assert_eq!(
            populate(stub, "create_bar", Some("baz")),
            "CreateBar baz CreateBar baz"
        );
    }

    #[test]
    fn test_populate_without_table_keeps_table_placeholder() {
        assert_eq!(populate("{{class}} {{table}}", "create_bar", None), "CreateBar {{table}}");
    }
}
