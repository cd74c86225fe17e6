//! The fallback registry.
//!
//! [`FallbackRegistry`] owns one [`FallbackSpec`] per logical column and
//! answers the resolution questions an import needs: which physical column
//! to use for a table, which value to take from a row, and which ordered
//! chain of columns should feed a conditional expression.
//!
//! Registration takes `&mut self` and happens once per session. Resolution
//! takes `&self`; its only side effect is promoting entries to permanent,
//! which is a single atomic flag per entry.

mod resolve;
mod traversal;

use std::collections::{BTreeMap, HashMap};

use crate::config::ResolverConfig;
use crate::error::{ConfigError, FallbackResult, ValidationError};
use crate::route::{FallbackRoute, FallbackSpec};

/// Registry of column fallback relationships.
///
/// # Examples
///
/// ```
/// use column_fallback::{FallbackRegistry, InMemorySchema};
///
/// let mut registry = FallbackRegistry::new();
/// registry.register_column("description", None, false)?;
/// registry.register_column("desc_short", Some("description"), false)?;
///
/// let schema = InMemorySchema::new().with_table("products", ["description"]);
/// let column = registry.resolve_column(&schema, "products", "desc_short")?;
/// assert_eq!(column, "description");
/// # Ok::<(), column_fallback::FallbackError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FallbackRegistry {
    routes: HashMap<String, FallbackSpec>,
    config: ResolverConfig,
}

impl FallbackRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            routes: HashMap::new(),
            config,
        }
    }

    /// Builds a registry from a complete route mapping.
    ///
    /// The mapping is validated as a whole, so targets may be declared in
    /// any order, but every target must itself be a key of the mapping.
    ///
    /// # Errors
    /// Returns a validation error for empty names, self-fallbacks or
    /// targets missing from the mapping.
    pub fn from_routes(
        routes: BTreeMap<String, FallbackRoute>,
        config: ResolverConfig,
    ) -> FallbackResult<Self> {
        for (name, route) in &routes {
            let target = normalize_target(route.fallback.as_deref());
            validate_edge(name, target, |t| routes.contains_key(t))?;
        }

        let routes = routes
            .into_iter()
            .map(|(name, route)| {
                let target = normalize_target(route.fallback.as_deref()).map(str::to_string);
                let spec = FallbackSpec::new(name.clone(), target, route.permanent);
                (name, spec)
            })
            .collect();

        Ok(Self { routes, config })
    }

    /// Builds a registry from the JSON form of a route mapping.
    ///
    /// # Errors
    /// Returns a configuration error on malformed JSON and a validation
    /// error if the mapping itself is inconsistent.
    pub fn from_json(json: &str, config: ResolverConfig) -> FallbackResult<Self> {
        let routes: BTreeMap<String, FallbackRoute> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        Self::from_routes(routes, config)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Number of registered columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no columns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Live entry for `name`.
    #[must_use]
    pub fn spec(&self, name: &str) -> Option<&FallbackSpec> {
        self.routes.get(name)
    }

    /// Current route for `name`, in serializable form.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<FallbackRoute> {
        self.routes.get(name).map(FallbackSpec::to_route)
    }

    /// Returns true if `name` is registered and currently permanent.
    #[must_use]
    pub fn is_permanent(&self, name: &str) -> bool {
        self.routes.get(name).is_some_and(FallbackSpec::is_permanent)
    }

    /// Adds or replaces the entry for `name`.
    ///
    /// An empty `fallback` is treated as no fallback.
    ///
    /// # Errors
    /// - `EmptyColumnName` if `name` is empty
    /// - `SelfFallback` if `fallback` equals `name`
    /// - `UnknownTarget` if `fallback` is not registered yet
    pub fn register_column(
        &mut self,
        name: &str,
        fallback: Option<&str>,
        permanent: bool,
    ) -> FallbackResult<()> {
        let target = normalize_target(fallback);
        validate_edge(name, target, |t| self.routes.contains_key(t))?;

        tracing::trace!(column = name, fallback = ?target, permanent, "registering column");
        self.routes.insert(
            name.to_string(),
            FallbackSpec::new(name.to_string(), target.map(str::to_string), permanent),
        );
        Ok(())
    }

    /// Wires or rewires the fallback of an already registered column.
    ///
    /// The permanence flag of `from` is left unchanged.
    ///
    /// # Errors
    /// - `UnknownColumn` if `from` is not registered
    /// - `UnknownTarget` if `to` is not registered
    /// - `SelfFallback` if `from == to`
    pub fn register_fallback(&mut self, from: &str, to: &str) -> FallbackResult<()> {
        if !self.routes.contains_key(from) {
            return Err(ValidationError::UnknownColumn {
                column: from.to_string(),
            }
            .into());
        }
        validate_edge(from, Some(to), |t| self.routes.contains_key(t))?;

        tracing::trace!(column = from, fallback = to, "wiring fallback");
        if let Some(spec) = self.routes.get_mut(from) {
            spec.set_fallback(to.to_string());
        }
        Ok(())
    }

    /// Snapshot of the live registry, including promoted flags.
    ///
    /// Feeding the snapshot back into [`FallbackRegistry::from_routes`]
    /// yields an equivalent registry.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, FallbackRoute> {
        self.routes
            .iter()
            .map(|(name, spec)| (name.clone(), spec.to_route()))
            .collect()
    }

    /// JSON form of [`FallbackRegistry::snapshot`].
    ///
    /// # Errors
    /// Returns a configuration error if serialization fails.
    pub fn to_json(&self) -> FallbackResult<String> {
        serde_json::to_string(&self.snapshot()).map_err(|e| {
            ConfigError::Serialize {
                message: e.to_string(),
            }
            .into()
        })
    }
}

fn normalize_target(fallback: Option<&str>) -> Option<&str> {
    fallback.filter(|t| !t.is_empty())
}

fn validate_edge(
    name: &str,
    target: Option<&str>,
    is_registered: impl Fn(&str) -> bool,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyColumnName);
    }
    let Some(target) = target else {
        return Ok(());
    };
    if target == name {
        return Err(ValidationError::SelfFallback {
            column: name.to_string(),
        });
    }
    if !is_registered(target) {
        return Err(ValidationError::UnknownTarget {
            column: name.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}
