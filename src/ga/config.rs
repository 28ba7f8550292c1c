//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Configuration parameters for one genetic algorithm run.
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(20)
///     .with_tournament_size(3)
///     .with_crossover_ratio(0.5);
/// assert_eq!(config.n_parents(), 24);
/// assert_eq!(config.n_directs(), 26);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Participants sampled per selection tournament.
    pub tournament_size: usize,
    /// Share of each new generation produced by crossover.
    pub crossover_ratio: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            tournament_size: 2,
            crossover_ratio: 0.85,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover ratio.
    pub fn with_crossover_ratio(mut self, ratio: f64) -> Self {
        self.crossover_ratio = ratio;
        self
    }

    /// Number of parents selected for crossover each generation.
    ///
    /// `population_size * crossover_ratio` rounded half-to-even, then
    /// lowered to an even number so parents pair up.
    pub fn n_parents(&self) -> usize {
        let raw = (self.population_size as f64 * self.crossover_ratio).round_ties_even();
        let n = (raw.max(0.0) as usize).min(self.population_size);
        n - n % 2
    }

    /// Number of chromosomes carried over unchanged each generation.
    pub fn n_directs(&self) -> usize {
        self.population_size - self.n_parents()
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RoutingError::invalid_config("population size must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(RoutingError::invalid_config("tournament size must be positive"));
        }
        if self.tournament_size > self.population_size {
            return Err(RoutingError::invalid_config(format!(
                "tournament size {} exceeds population size {}",
                self.tournament_size, self.population_size
            )));
        }
        if !self.crossover_ratio.is_finite() || !(0.0..=1.0).contains(&self.crossover_ratio) {
            return Err(RoutingError::invalid_config(format!(
                "crossover ratio {} is outside [0, 1]",
                self.crossover_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 100);
        assert_eq!(c.generations, 200);
        assert_eq!(c.tournament_size, 2);
        assert_eq!(c.crossover_ratio, 0.85);
        assert_eq!(c.n_parents(), 84);
        assert_eq!(c.n_directs(), 16);
    }

    #[test]
    fn test_n_parents_rounds_half_to_even() {
        // 5 * 0.5 = 2.5 → 2
        let c = GaConfig::default().with_population_size(5).with_crossover_ratio(0.5);
        assert_eq!(c.n_parents(), 2);
        // 7 * 0.5 = 3.5 → 4
        let c = GaConfig::default().with_population_size(7).with_crossover_ratio(0.5);
        assert_eq!(c.n_parents(), 4);
        assert_eq!(c.n_directs(), 3);
    }

    #[test]
    fn test_n_parents_extremes() {
        let c = GaConfig::default().with_population_size(9).with_crossover_ratio(1.0);
        assert_eq!(c.n_parents(), 8);
        let c = GaConfig::default().with_population_size(9).with_crossover_ratio(0.0);
        assert_eq!(c.n_parents(), 0);
        assert_eq!(c.n_directs(), 9);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(3)
            .with_tournament_size(4)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_crossover_ratio(1.5).validate().is_err());
        assert!(GaConfig::default().with_crossover_ratio(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(GaConfig::default().validate().is_ok());
    }
}
