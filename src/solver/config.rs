//! Solver configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::ga::{GaConfig, DEFAULT_SEGMENT_ITERATIONS};

/// Budgets and switches for a solve.
///
/// Deserializes from any serde format; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::GaConfig;
/// use delivery_routing::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_ga(GaConfig::default().with_generations(50))
///     .with_instances(4)
///     .with_seed(7)
///     .with_parallel(true);
/// assert_eq!(config.ga.generations, 50);
/// assert_eq!(config.segment_tabu_iterations, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Genetic algorithm parameters for each VRP instance.
    pub ga: GaConfig,
    /// Independent genetic algorithm runs per VRP solve.
    pub instances: usize,
    /// Tabu iterations per segment during fitness evaluation.
    pub segment_tabu_iterations: usize,
    /// Tabu iterations for the single-tour solve.
    pub tour_tabu_iterations: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
    /// Run the VRP instances on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            instances: 2,
            segment_tabu_iterations: DEFAULT_SEGMENT_ITERATIONS,
            tour_tabu_iterations: 1000,
            seed: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Sets the genetic algorithm parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the number of independent VRP runs.
    pub fn with_instances(mut self, n: usize) -> Self {
        self.instances = n;
        self
    }

    /// Sets the per-segment tabu budget.
    pub fn with_segment_tabu_iterations(mut self, n: usize) -> Self {
        self.segment_tabu_iterations = n;
        self
    }

    /// Sets the single-tour tabu budget.
    pub fn with_tour_tabu_iterations(mut self, n: usize) -> Self {
        self.tour_tabu_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel VRP runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the configuration can drive a solve.
    pub fn validate(&self) -> Result<()> {
        if self.instances == 0 {
            return Err(RoutingError::invalid_config("at least one instance is required"));
        }
        self.ga.validate()
    }

    /// Random number generator for the given run.
    ///
    /// Seeded runs use `seed + run`, so results do not depend on whether the
    /// runs execute in parallel.
    pub(crate) fn rng_for(&self, run: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.instances, 2);
        assert_eq!(c.segment_tabu_iterations, 5);
        assert_eq!(c.tour_tabu_iterations, 1000);
        assert!(c.seed.is_none());
        assert!(!c.parallel);
        assert_eq!(c.ga, GaConfig::default());
    }

    #[test]
    fn test_validate() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::default().with_instances(0).validate().is_err());
        let bad_ga = GaConfig::default().with_tournament_size(0);
        assert!(SolverConfig::default().with_ga(bad_ga).validate().is_err());
    }

    #[test]
    fn test_seeded_rng_per_run() {
        let c = SolverConfig::default().with_seed(10);
        let a: u64 = c.rng_for(1).random();
        let b: u64 = c.rng_for(1).random();
        let other: u64 = c.rng_for(2).random();
        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let c: SolverConfig = serde_json::from_str(
            r#"{"instances": 3, "seed": 5, "ga": {"population_size": 40}}"#,
        )
        .expect("valid json");
        assert_eq!(c.instances, 3);
        assert_eq!(c.seed, Some(5));
        assert_eq!(c.ga.population_size, 40);
        assert_eq!(c.ga.generations, 200);
        assert_eq!(c.tour_tabu_iterations, 1000);
    }
}
