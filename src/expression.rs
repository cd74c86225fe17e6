//! Rendering fallback chains as SQL conditional expressions.
//!
//! A chain `[a, b, c]` becomes
//! `CASE WHEN TRIM(a) > '' THEN a WHEN TRIM(b) > '' THEN b ELSE c END`,
//! with every identifier quoted and optionally table-qualified. The first
//! column has the highest priority.

use std::fmt::Write as _;

use crate::config::QuoteStyle;

/// Quotes a single identifier, doubling any embedded delimiter.
///
/// ```
/// use column_fallback::{quote_identifier, QuoteStyle};
///
/// assert_eq!(quote_identifier("title", QuoteStyle::Backtick), "`title`");
/// assert_eq!(quote_identifier("we\"ird", QuoteStyle::DoubleQuote), "\"we\"\"ird\"");
/// ```
#[must_use]
pub fn quote_identifier(name: &str, style: QuoteStyle) -> String {
    let delimiter = style.delimiter();
    let mut out = String::with_capacity(name.len() + 2);
    out.push(delimiter);
    for ch in name.chars() {
        if ch == delimiter {
            out.push(delimiter);
        }
        out.push(ch);
    }
    out.push(delimiter);
    out
}

/// Quoted, optionally qualified column reference.
///
/// A dotted qualifier (`schema.table`) is quoted segment by segment.
fn column_ref(column: &str, qualifier: Option<&str>, style: QuoteStyle) -> String {
    let mut out = String::new();
    if let Some(qualifier) = qualifier.filter(|q| !q.is_empty()) {
        for segment in qualifier.split('.') {
            out.push_str(&quote_identifier(segment, style));
            out.push('.');
        }
    }
    out.push_str(&quote_identifier(column, style));
    out
}

/// Renders a fallback chain using backtick quoting.
///
/// See [`render_conditional_expression_with`].
#[must_use]
pub fn render_conditional_expression<S: AsRef<str>>(columns: &[S], qualifier: Option<&str>) -> String {
    render_conditional_expression_with(columns, qualifier, QuoteStyle::Backtick)
}

/// Renders a fallback chain as a conditional expression.
///
/// - no columns: the quoted empty identifier, qualified if requested
/// - one column: the quoted column reference, no conditional
/// - more: a `CASE` testing each column but the last with
///   `TRIM(col) > ''`, in order, with the last column as the `ELSE` branch
///
/// ```
/// use column_fallback::{render_conditional_expression_with, QuoteStyle};
///
/// let sql = render_conditional_expression_with(&["title", "title_alt"], Some("products"), QuoteStyle::DoubleQuote);
/// assert_eq!(
///     sql,
///     r#"CASE WHEN TRIM("products"."title") > '' THEN "products"."title" ELSE "products"."title_alt" END"#
/// );
/// ```
#[must_use]
pub fn render_conditional_expression_with<S: AsRef<str>>(
    columns: &[S],
    qualifier: Option<&str>,
    style: QuoteStyle,
) -> String {
    let Some((last, leading)) = columns.split_last() else {
        return column_ref("", qualifier, style);
    };
    if leading.is_empty() {
        return column_ref(last.as_ref(), qualifier, style);
    }

    let mut sql = String::from("CASE");
    for column in leading {
        let reference = column_ref(column.as_ref(), qualifier, style);
        // Writing into a String cannot fail.
        let _ = write!(sql, " WHEN TRIM({reference}) > '' THEN {reference}");
    }
    let _ = write!(sql, " ELSE {} END", column_ref(last.as_ref(), qualifier, style));
    sql
}
