//! Fallback specifications.
//!
//! A [`FallbackSpec`] is the live registry entry for one logical column.
//! Its target is fixed once registered; only the permanence flag changes
//! after setup, and only from `false` to `true`.
//!
//! [`FallbackRoute`] is the plain serializable shape of the same entry.
//! It is both the accepted construction input and the snapshot format.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Serializable description of one column's fallback.
///
/// ```
/// use column_fallback::FallbackRoute;
///
/// let route: FallbackRoute = serde_json::from_str(r#"{"fallback": "description"}"#).unwrap();
/// assert_eq!(route.fallback.as_deref(), Some("description"));
/// assert!(!route.permanent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackRoute {
    /// Next candidate column; `None` makes this column terminal.
    pub fallback: Option<String>,
    /// Always continue past this column to its fallback.
    pub permanent: bool,
}

impl FallbackRoute {
    /// A terminal route with no fallback.
    #[must_use]
    pub const fn terminal() -> Self {
        Self {
            fallback: None,
            permanent: false,
        }
    }

    /// A route that falls back to `target` when this column is unusable.
    #[must_use]
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            fallback: Some(target.into()),
            permanent: false,
        }
    }

    /// Marks the route as permanent.
    #[must_use]
    pub const fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }
}

/// Live registry entry for one logical column.
#[derive(Debug)]
pub struct FallbackSpec {
    name: String,
    fallback: Option<String>,
    permanent: AtomicBool,
}

impl FallbackSpec {
    pub(crate) fn new(name: String, fallback: Option<String>, permanent: bool) -> Self {
        Self {
            name,
            fallback,
            permanent: AtomicBool::new(permanent),
        }
    }

    /// The column name this entry describes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The next candidate column, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Whether the route past this column has become fixed.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.permanent.load(Ordering::Acquire)
    }

    /// True when resolution must skip this column without checking it.
    pub(crate) fn bypasses(&self) -> bool {
        self.fallback.is_some() && self.is_permanent()
    }

    /// Promotes the entry to permanent. Returns true if this call flipped it.
    pub(crate) fn promote(&self) -> bool {
        !self.permanent.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn set_fallback(&mut self, target: String) {
        self.fallback = Some(target);
    }

    /// Snapshot of this entry in its serializable form.
    #[must_use]
    pub fn to_route(&self) -> FallbackRoute {
        FallbackRoute {
            fallback: self.fallback.clone(),
            permanent: self.is_permanent(),
        }
    }
}

impl Clone for FallbackSpec {
    fn clone(&self) -> Self {
        Self::new(self.name.clone(), self.fallback.clone(), self.is_permanent())
    }
}
