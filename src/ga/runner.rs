//! Generational loop.
//!
//! Each generation is rebuilt from the previous one:
//!
//! - `n_directs` tournament winners are carried over unchanged, memo included;
//! - `n_parents` tournament winners are paired and crossed, and the children
//!   start with an empty memo.
//!
//! No mutation operator is applied. Fitness is evaluated lazily inside the
//! tournaments, so a chromosome sampled several times is refined several times.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::Result;
use crate::models::Gene;

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::crossover::crossover;
use super::problem::CvrpProblem;

/// Outcome of one genetic algorithm run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome of the final population.
    pub best: Chromosome,
    /// `best` decoded into depot-bracketed routes of matrix indices.
    pub routes: Vec<Vec<usize>>,
}

impl GaResult {
    /// Fitness of the best chromosome.
    pub fn fitness(&self) -> f64 {
        self.best.best_fitness()
    }
}

/// Runs the genetic algorithm.
pub struct GaRunner;

impl GaRunner {
    /// Evolves permutations of `genes` and returns the best decoded result.
    ///
    /// `on_generation` is called after every generation with the generation
    /// number (from 1) and the lowest memoized fitness in the new population.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfig`](crate::RoutingError::InvalidConfig) when `config` fails
    /// [`GaConfig::validate`], e.g. a tournament larger than the population.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::distance::DistanceMatrix;
    /// use delivery_routing::ga::{CvrpProblem, GaConfig, GaRunner};
    /// use delivery_routing::models::{Coordinate, Gene};
    /// use rand::SeedableRng;
    ///
    /// let dm = DistanceMatrix::from_coordinates(&[
    ///     Coordinate::new(1.0, 0.0),
    ///     Coordinate::new(2.0, 0.0),
    ///     Coordinate::new(3.0, 0.0),
    ///     Coordinate::new(0.0, 0.0),
    /// ]);
    /// let genes = vec![Gene::new(0, 5), Gene::new(1, 5), Gene::new(2, 5)];
    /// let problem = CvrpProblem::new(&dm, 3, 10);
    /// let config = GaConfig::default().with_population_size(10).with_generations(5);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    ///
    /// let result = GaRunner::run(&problem, &genes, &config, &mut rng, |_, _| {}).unwrap();
    /// assert_eq!(result.routes.len(), 2);
    /// assert!(result.fitness().is_finite());
    /// ```
    pub fn run<R, F>(
        problem: &CvrpProblem<'_>,
        genes: &[Gene],
        config: &GaConfig,
        rng: &mut R,
        mut on_generation: F,
    ) -> Result<GaResult>
    where
        R: Rng,
        F: FnMut(usize, f64),
    {
        config.validate()?;
        let mut population = initial_population(genes, config.population_size, rng);
        let n_parents = config.n_parents();
        let n_directs = config.n_directs();

        for generation in 1..=config.generations {
            population = new_generation(problem, config, population, n_parents, n_directs, rng);
            let best = population
                .iter()
                .map(Chromosome::best_fitness)
                .fold(f64::INFINITY, f64::min);
            on_generation(generation, best);
        }

        let mut best_index = 0;
        let mut best_fitness = f64::INFINITY;
        for (i, chromosome) in population.iter_mut().enumerate() {
            let fitness = problem.fitness(chromosome, rng);
            if i == 0 || fitness < best_fitness {
                best_index = i;
                best_fitness = fitness;
            }
        }

        let best = population.swap_remove(best_index);
        let routes = problem.decode(best.phenotype());
        Ok(GaResult { best, routes })
    }
}

fn initial_population<R: Rng>(genes: &[Gene], size: usize, rng: &mut R) -> Vec<Chromosome> {
    (0..size)
        .map(|_| {
            let mut shuffled = genes.to_vec();
            shuffled.shuffle(rng);
            Chromosome::new(shuffled)
        })
        .collect()
}

fn new_generation<R: Rng>(
    problem: &CvrpProblem<'_>,
    config: &GaConfig,
    mut population: Vec<Chromosome>,
    n_parents: usize,
    n_directs: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    let k = config.tournament_size;
    let mut next = tournament_selection(problem, &mut population, n_directs, k, rng);
    let parents = tournament_selection(problem, &mut population, n_parents, k, rng);

    for pair in parents.chunks_exact(2) {
        let (child1, child2) = crossover(pair[0].genes(), pair[1].genes(), problem.depot(), rng);
        next.push(Chromosome::new(child1));
        next.push(Chromosome::new(child2));
    }
    next
}

/// Picks `n` winners; each tournament samples `k` distinct chromosomes and
/// keeps the first one with the lowest fitness.
fn tournament_selection<R: Rng>(
    problem: &CvrpProblem<'_>,
    population: &mut [Chromosome],
    n: usize,
    k: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut winners = Vec::with_capacity(n);
    for _ in 0..n {
        let sample = index::sample(rng, population.len(), k);
        let mut winner = None;
        let mut winner_fitness = f64::INFINITY;
        for idx in sample.iter() {
            let fitness = problem.fitness(&mut population[idx], rng);
            if winner.is_none() || fitness < winner_fitness {
                winner = Some(idx);
                winner_fitness = fitness;
            }
        }
        if let Some(idx) = winner {
            winners.push(population[idx].clone());
        }
    }
    winners
}
