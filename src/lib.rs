//! # column-fallback
//!
//! Fallback-chain column resolution for tabular imports whose target schema
//! evolves independently of the data source.
//!
//! A logical column may be missing from the table, empty in a given row, or
//! deliberately bypassed. The [`FallbackRegistry`] records, for each logical
//! column, which column to try next, and resolves:
//!
//! - the physical column to use against a live schema ([`FallbackRegistry::resolve_column`])
//! - the value to use from a decoded row ([`FallbackRegistry::resolve_value`])
//! - the ordered priority chain for a query ([`FallbackRegistry::resolve_chain`])
//!
//! A chain renders as a portable `CASE WHEN TRIM(..) > '' ..` expression via
//! [`render_conditional_expression`].
//!
//! Columns found missing from the schema are remembered as permanent
//! fallbacks for the lifetime of the registry, and every traversal is
//! bounded by [`ResolverConfig::max_hops`] so a cyclic registry fails with
//! [`ResolveError::FallbackChainExceeded`] instead of looping.
//!
//! ## Usage
//!
//! ```rust
//! use column_fallback::{FallbackRegistry, InMemorySchema, render_conditional_expression};
//!
//! let mut registry = FallbackRegistry::new();
//! registry.register_column("title_alt", None, false)?;
//! registry.register_column("title", Some("title_alt"), false)?;
//!
//! let schema = InMemorySchema::new().with_table("products", ["title", "title_alt"]);
//! let chain = registry.resolve_chain(&schema, "products", "title")?;
//! let sql = render_conditional_expression(&chain, Some("products"));
//! assert!(sql.starts_with("CASE WHEN TRIM(`products`.`title`)"));
//! # Ok::<(), column_fallback::FallbackError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod expression;
pub mod registry;
pub mod route;
pub mod schema;
pub mod value;

pub use config::{QuoteStyle, ResolverConfig, DEFAULT_MAX_HOPS};
pub use error::{ConfigError, FallbackError, FallbackResult, ResolveError, ValidationError};
pub use expression::{quote_identifier, render_conditional_expression, render_conditional_expression_with};
pub use registry::FallbackRegistry;
pub use route::{FallbackRoute, FallbackSpec};
pub use schema::{InMemorySchema, SchemaChecker};
pub use value::{row_from_json, Row, Value};
