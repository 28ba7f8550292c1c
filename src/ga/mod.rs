//! Genetic algorithm for capacitated routing.
//!
//! - [`Chromosome`] — permutation of customer genes with a best-decoding memo
//! - [`crossover`] — single-cut crossover with duplicate repair
//! - [`split_by_capacity`] — greedy capacity segmentation
//! - [`CvrpProblem`] — tabu-refined fitness and route decoding
//! - [`GaRunner`] — tournament selection and generational loop

mod chromosome;
mod config;
mod crossover;
mod problem;
mod runner;
mod split;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use crossover::{crossover, crossover_at};
pub use problem::{CvrpProblem, DEFAULT_SEGMENT_ITERATIONS};
pub use runner::{GaResult, GaRunner};
pub use split::split_by_capacity;
