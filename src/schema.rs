//! Table-schema introspection.
//!
//! The resolver only ever asks one question of the live schema: does this
//! column physically exist in this table? Anything that can answer it can
//! drive resolution, including plain closures.

use std::collections::{HashMap, HashSet};

/// Answers column-existence questions about a live table schema.
///
/// Implementations must be side-effect free from the resolver's point of
/// view. The resolver calls this synchronously, at most once per hop.
pub trait SchemaChecker {
    /// Returns true if `column` physically exists in `table`.
    fn column_exists(&self, table: &str, column: &str) -> bool;
}

impl<F> SchemaChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn column_exists(&self, table: &str, column: &str) -> bool {
        self(table, column)
    }
}

/// A fixed, in-memory table schema.
///
/// Useful for tests and for callers that snapshot `information_schema`
/// once per import session.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchema {
    tables: HashMap<String, HashSet<String>>,
}

impl InMemorySchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) a table with the given columns.
    #[must_use]
    pub fn with_table<I, S>(mut self, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_table(table, columns);
        self
    }

    /// Adds (or extends) a table with the given columns.
    pub fn add_table<I, S>(&mut self, table: impl Into<String>, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .entry(table.into())
            .or_default()
            .extend(columns.into_iter().map(Into::into));
    }

    /// Adds a single column, creating the table if needed.
    pub fn add_column(&mut self, table: impl Into<String>, column: impl Into<String>) {
        self.tables.entry(table.into()).or_default().insert(column.into());
    }

    /// Removes a column. Returns true if it was present.
    pub fn drop_column(&mut self, table: &str, column: &str) -> bool {
        self.tables
            .get_mut(table)
            .is_some_and(|columns| columns.remove(column))
    }
}

impl SchemaChecker for InMemorySchema {
    fn column_exists(&self, table: &str, column: &str) -> bool {
        self.tables
            .get(table)
            .is_some_and(|columns| columns.contains(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_schema_lookup() {
        let schema = InMemorySchema::new().with_table("products", ["title", "description"]);
        assert!(schema.column_exists("products", "title"));
        assert!(!schema.column_exists("products", "desc_short"));
        assert!(!schema.column_exists("orders", "title"));
    }

    #[test]
    fn test_in_memory_schema_mutation() {
        let mut schema = InMemorySchema::new();
        schema.add_column("products", "sku");
        assert!(schema.column_exists("products", "sku"));
        assert!(schema.drop_column("products", "sku"));
        assert!(!schema.drop_column("products", "sku"));
        assert!(!schema.column_exists("products", "sku"));
    }

    #[test]
    fn test_closure_checker() {
        let checker = |_: &str, column: &str| column.starts_with("title");
        assert!(checker.column_exists("any", "title_alt"));
        assert!(!checker.column_exists("any", "name"));
    }
}
