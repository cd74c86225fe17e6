//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FallbackResult};

/// Default upper bound on fallback hops per resolution call.
pub const DEFAULT_MAX_HOPS: usize = 20;

/// Identifier quoting convention of the target query dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `` `name` `` (MySQL, MariaDB, SQLite).
    #[default]
    Backtick,
    /// `"name"` (ANSI SQL, PostgreSQL).
    DoubleQuote,
}

impl QuoteStyle {
    /// The delimiter character for this style.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::DoubleQuote => '"',
        }
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum fallback hops before a traversal is aborted.
    pub max_hops: usize,
    /// Quoting used when rendering conditional expressions.
    pub quote_style: QuoteStyle,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            quote_style: QuoteStyle::default(),
        }
    }
}

impl ResolverConfig {
    /// Sets the hop bound. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops.max(1);
        self
    }

    /// Sets the identifier quoting style.
    #[must_use]
    pub const fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns a configuration error on malformed input.
    pub fn from_json(json: &str) -> FallbackResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        let max_hops = config.max_hops;
        Ok(config.with_max_hops(max_hops))
    }

    pub(crate) fn hop_limit(&self) -> usize {
        self.max_hops.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_hops, DEFAULT_MAX_HOPS);
        assert_eq!(config.quote_style, QuoteStyle::Backtick);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ResolverConfig::from_json(r#"{"quote_style": "double_quote"}"#).unwrap();
        assert_eq!(config.max_hops, DEFAULT_MAX_HOPS);
        assert_eq!(config.quote_style, QuoteStyle::DoubleQuote);
    }

    #[test]
    fn test_max_hops_clamped() {
        assert_eq!(ResolverConfig::default().with_max_hops(0).max_hops, 1);
        let config = ResolverConfig::from_json(r#"{"max_hops": 0}"#).unwrap();
        assert_eq!(config.max_hops, 1);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ResolverConfig::from_json(r#"{"max_hops": "many"}"#).unwrap_err();
        assert!(err.is_config());
    }
}
