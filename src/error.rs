//! Error types for column fallback resolution.
//!
//! All errors are strongly typed using thiserror. Registration mistakes,
//! runaway traversals and malformed configuration input each get their own
//! enum so callers can pattern match on the exact condition.

use thiserror::Error;

/// Registration-time contract violations.
///
/// These are configuration mistakes: the caller must fix the registry
/// definition before proceeding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Column name cannot be empty")]
    EmptyColumnName,

    #[error("Column '{column}' cannot fall back to itself")]
    SelfFallback {
        column: String,
    },

    #[error("Column '{column}' is not registered")]
    UnknownColumn {
        column: String,
    },

    #[error("Fallback target '{target}' of column '{column}' is not registered")]
    UnknownTarget {
        column: String,
        target: String,
    },
}

/// Failures raised while walking a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Fallback chain for column '{column}' exceeded {max_hops} hops")]
    FallbackChainExceeded {
        column: String,
        max_hops: usize,
    },
}

/// Malformed registry or resolver configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {message}")]
    Parse {
        message: String,
    },

    #[error("Failed to serialize configuration: {message}")]
    Serialize {
        message: String,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FallbackError {
    /// Returns true if this is a registration-time validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if a traversal exceeded its hop bound.
    #[must_use]
    pub const fn is_chain_exceeded(&self) -> bool {
        matches!(
            self,
            Self::Resolve(ResolveError::FallbackChainExceeded { .. })
        )
    }

    /// Returns true if this is a configuration input error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this error is retryable.
    ///
    /// Nothing here changes on retry: a bad registry stays bad until the
    /// caller fixes it.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type alias for fallback operations.
pub type FallbackResult<T> = Result<T, FallbackError>;
