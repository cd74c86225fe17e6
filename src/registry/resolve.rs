//! Resolution operations.

use crate::error::FallbackResult;
use crate::expression::render_conditional_expression_with;
use crate::schema::SchemaChecker;
use crate::value::{Row, Value};

use super::traversal::Visit;
use super::FallbackRegistry;

impl FallbackRegistry {
    /// Resolves the physical column to use for `column` in `table`.
    ///
    /// Candidates that are missing from the schema are passed over and
    /// promoted to permanent, so later calls skip the schema check for them.
    /// The returned column is not guaranteed to exist: a chain that runs out
    /// of fallbacks ends on its last candidate.
    ///
    /// # Errors
    /// Returns `FallbackChainExceeded` if the walk exceeds the hop limit.
    pub fn resolve_column<S>(&self, schema: &S, table: &str, column: &str) -> FallbackResult<String>
    where
        S: SchemaChecker + ?Sized,
    {
        let walk = self.walk(column, |spec| {
            if schema.column_exists(table, spec.name()) {
                Visit::Stop
            } else {
                Self::promote(spec);
                Visit::Skip
            }
        })?;
        Ok(walk.terminal.to_string())
    }

    /// Resolves the value that should supply `column` from `row`.
    ///
    /// A missing key and an empty value both move on to the fallback, but
    /// only a missing key promotes the entry: emptiness is a fact about one
    /// row, absence is a fact about the source layout.
    ///
    /// Returns `None` when the terminal column is not in the row.
    ///
    /// # Errors
    /// Returns `FallbackChainExceeded` if the walk exceeds the hop limit.
    pub fn resolve_value<'r, R>(&self, row: &'r R, column: &str) -> FallbackResult<Option<&'r Value>>
    where
        R: Row + ?Sized,
    {
        let walk = self.walk(column, |spec| match row.get(spec.name()) {
            None => {
                Self::promote(spec);
                Visit::Skip
            }
            Some(value) if value.is_empty() => Visit::Skip,
            Some(_) => Visit::Stop,
        })?;
        Ok(row.get(walk.terminal))
    }

    /// Resolves the ordered priority list of columns for `column` in `table`.
    ///
    /// Permanent entries and columns missing from the schema are left out
    /// (the latter promoted). Every existing column along the chain is
    /// included. If nothing qualifies, the list holds the candidate the walk
    /// ended on.
    ///
    /// # Errors
    /// Returns `FallbackChainExceeded` if the walk exceeds the hop limit.
    pub fn resolve_chain<S>(&self, schema: &S, table: &str, column: &str) -> FallbackResult<Vec<String>>
    where
        S: SchemaChecker + ?Sized,
    {
        let walk = self.walk(column, |spec| {
            if schema.column_exists(table, spec.name()) {
                Visit::Take
            } else {
                Self::promote(spec);
                Visit::Skip
            }
        })?;

        if walk.taken.is_empty() {
            return Ok(vec![walk.terminal.to_string()]);
        }
        Ok(walk.taken.into_iter().map(str::to_string).collect())
    }

    /// Resolves the chain for `column` and renders it as a conditional
    /// expression using the configured quote style.
    ///
    /// # Errors
    /// Returns `FallbackChainExceeded` if the walk exceeds the hop limit.
    pub fn conditional_expression<S>(
        &self,
        schema: &S,
        table: &str,
        column: &str,
        qualifier: Option<&str>,
    ) -> FallbackResult<String>
    where
        S: SchemaChecker + ?Sized,
    {
        let chain = self.resolve_chain(schema, table, column)?;
        Ok(render_conditional_expression_with(
            &chain,
            qualifier,
            self.config.quote_style,
        ))
    }
}
