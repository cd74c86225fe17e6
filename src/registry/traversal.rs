//! The single chain walker behind every resolution operation.

use crate::error::ResolveError;
use crate::route::FallbackSpec;

use super::FallbackRegistry;

/// What to do with a candidate that is not bypassed as permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Visit {
    /// The candidate is usable; end the walk here.
    Stop,
    /// The candidate is unusable; move on to its fallback, if any.
    Skip,
    /// Record the candidate, then move on to its fallback, if any.
    Take,
}

/// Outcome of a walk.
#[derive(Debug)]
pub(super) struct Walk<'a> {
    /// The candidate the walk ended on.
    pub terminal: &'a str,
    /// Candidates recorded with [`Visit::Take`], in visiting order.
    pub taken: Vec<&'a str>,
}

impl FallbackRegistry {
    /// Walks the chain starting at `start`.
    ///
    /// Entries that are permanent and have a target are passed over without
    /// consulting `visit`. The walk ends on an unregistered candidate, on
    /// [`Visit::Stop`], or when the current entry has no target to move to.
    pub(super) fn walk<'a, F>(&'a self, start: &'a str, mut visit: F) -> Result<Walk<'a>, ResolveError>
    where
        F: FnMut(&FallbackSpec) -> Visit,
    {
        let max_hops = self.config.hop_limit();
        let mut current = start;
        let mut taken = Vec::new();
        let mut hops = 0usize;

        while let Some(spec) = self.routes.get(current) {
            let advance = spec.bypasses()
                || match visit(spec) {
                    Visit::Stop => false,
                    Visit::Skip => true,
                    Visit::Take => {
                        taken.push(spec.name());
                        true
                    }
                };

            let Some(next) = spec.fallback().filter(|_| advance) else {
                break;
            };

            hops += 1;
            if hops > max_hops {
                tracing::warn!(column = start, max_hops, "fallback chain exceeded hop limit");
                return Err(ResolveError::FallbackChainExceeded {
                    column: start.to_string(),
                    max_hops,
                });
            }
            tracing::trace!(from = current, to = next, hops, "fallback hop");
            current = next;
        }

        Ok(Walk {
            terminal: current,
            taken,
        })
    }

    /// Promotes `spec` after its column was observed missing.
    pub(super) fn promote(spec: &FallbackSpec) {
        if spec.promote() {
            tracing::debug!(
                column = spec.name(),
                target = ?spec.fallback(),
                "column missing, fallback made permanent"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;

    fn chain(len: usize, config: ResolverConfig) -> FallbackRegistry {
        let mut registry = FallbackRegistry::with_config(config);
        registry.register_column("c0", None, false).unwrap();
        for i in 1..len {
            let prev = format!("c{}", i - 1);
            registry
                .register_column(&format!("c{i}"), Some(&prev), false)
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_walk_stops_on_unregistered_start() {
        let registry = FallbackRegistry::new();
        let walk = registry.walk("ghost", |_| Visit::Skip).unwrap();
        assert_eq!(walk.terminal, "ghost");
        assert!(walk.taken.is_empty());
    }

    #[test]
    fn test_walk_skip_runs_to_terminal() {
        let registry = chain(4, ResolverConfig::default());
        let walk = registry.walk("c3", |_| Visit::Skip).unwrap();
        assert_eq!(walk.terminal, "c0");
    }

    #[test]
    fn test_walk_take_records_in_order() {
        let registry = chain(3, ResolverConfig::default());
        let walk = registry.walk("c2", |_| Visit::Take).unwrap();
        assert_eq!(walk.taken, vec!["c2", "c1", "c0"]);
        assert_eq!(walk.terminal, "c0");
    }

    #[test]
    fn test_walk_bypasses_permanent_without_visiting() {
        let mut registry = chain(3, ResolverConfig::default());
        registry.register_column("c2", Some("c1"), true).unwrap();
        let mut visited = Vec::new();
        let walk = registry
            .walk("c2", |spec| {
                visited.push(spec.name().to_string());
                Visit::Stop
            })
            .unwrap();
        assert_eq!(walk.terminal, "c1");
        assert_eq!(visited, vec!["c1".to_string()]);
    }

    #[test]
    fn test_walk_hop_limit_is_inclusive() {
        let config = ResolverConfig::default().with_max_hops(3);
        let registry = chain(4, config.clone());
        assert_eq!(registry.walk("c3", |_| Visit::Skip).unwrap().terminal, "c0");

        let registry = chain(5, config);
        let err = registry.walk("c4", |_| Visit::Skip).unwrap_err();
        assert_eq!(
            err,
            ResolveError::FallbackChainExceeded {
                column: "c4".to_string(),
                max_hops: 3,
            }
        );
    }
}
