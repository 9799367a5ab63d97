//! Search tuning knobs.

/// Candidates produced per generation.
pub const DEFAULT_CANDIDATES: usize = 3;
/// Per-step chance of discarding the seed's direction.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.2;
/// Hard cap on the number of steps in any route.
pub const DEFAULT_MAX_ROUTE_LENGTH: usize = 30;

/// Parameters of a [`RouteSearch`](crate::RouteSearch).
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Breadth of each generation.
    pub candidates_per_generation: usize,
    /// Probability, per step, of replacing the seed route's direction with a
    /// freshly sampled one. Must lie in `[0, 1]`.
    pub mutation_probability: f64,
    /// Maximum steps in a route.
    pub max_route_length: usize,
    /// Give up with [`SearchError::NotFound`](crate::SearchError::NotFound)
    /// after this many generations. `None` searches until the goal is reached,
    /// which may never happen.
    pub max_generations: Option<u64>,
    /// Seed for the random source used by [`solve`](crate::solve). `None`
    /// draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidates_per_generation: DEFAULT_CANDIDATES,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            max_route_length: DEFAULT_MAX_ROUTE_LENGTH,
            max_generations: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Set the generation budget.
    pub fn with_max_generations(mut self, max: u64) -> Self {
        self.max_generations = Some(max);
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the parameters describe a runnable search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates_per_generation == 0 {
            return Err(ConfigError::NoCandidates);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if self.max_route_length == 0 {
            return Err(ConfigError::ZeroRouteLength);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("At least one candidate per generation is required")]
    NoCandidates,
    #[error("Mutation probability must lie in [0, 1], got {0}")]
    InvalidMutationProbability(f64),
    #[error("Maximum route length must be non-zero")]
    ZeroRouteLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.candidates_per_generation, 3);
        assert_eq!(c.mutation_probability, 0.2);
        assert_eq!(c.max_route_length, 30);
        assert_eq!(c.max_generations, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let c = SearchConfig {
            candidates_per_generation: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::NoCandidates));

        for p in [-0.1, 1.5, f64::NAN] {
            let c = SearchConfig {
                mutation_probability: p,
                ..Default::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidMutationProbability(_))
            ));
        }

        let c = SearchConfig {
            max_route_length: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroRouteLength));
    }

    #[test]
    fn probability_bounds_are_inclusive() {
        for p in [0.0, 1.0] {
            let c = SearchConfig {
                mutation_probability: p,
                ..Default::default()
            };
            assert!(c.validate().is_ok());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let c: SearchConfig =
            serde_json::from_str(r#"{ "mutation_probability": 0.5, "seed": 7 }"#).unwrap();
        assert_eq!(c.mutation_probability, 0.5);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.candidates_per_generation, DEFAULT_CANDIDATES);
        assert_eq!(c.max_route_length, DEFAULT_MAX_ROUTE_LENGTH);
    }
}
