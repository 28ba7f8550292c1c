//! Capacitated VRP fitness and decoding.
//!
//! # Evaluation
//!
//! The chromosome's genes are split greedily by capacity. Each segment,
//! prefixed with the depot, is refined by a short tabu search, rotated back
//! to start after the depot, and its tabu cost is added to the total. The
//! concatenated refined segments form the candidate order offered to the
//! chromosome's memo.
//!
//! # Decoding
//!
//! Re-applies the same capacity split to a gene order and brackets every
//! segment with the depot, without any refinement.

use rand::Rng;

use crate::distance::{DistanceMatrix, ProblemInstance};
use crate::local_search::{reorder_solution, TabuSearch};
use crate::models::Gene;

use super::chromosome::Chromosome;
use super::split::split_by_capacity;

/// Default tabu iterations spent on each segment during evaluation.
pub const DEFAULT_SEGMENT_ITERATIONS: usize = 5;

/// Capacitated routing problem seen by the genetic algorithm.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::DistanceMatrix;
/// use delivery_routing::ga::{Chromosome, CvrpProblem};
/// use delivery_routing::models::{Coordinate, Gene};
/// use rand::SeedableRng;
///
/// // customers 0..3 on a line, depot (index 3) at the origin
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(2.0, 0.0),
///     Coordinate::new(3.0, 0.0),
///     Coordinate::new(0.0, 0.0),
/// ]);
/// let problem = CvrpProblem::new(&dm, 3, 10);
/// let mut chromosome = Chromosome::new(vec![Gene::new(2, 5), Gene::new(0, 5), Gene::new(1, 5)]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let fitness = problem.fitness(&mut chromosome, &mut rng);
/// assert_eq!(fitness, chromosome.best_fitness());
///
/// let routes = problem.decode(chromosome.phenotype());
/// assert!(routes.iter().all(|r| r.first() == Some(&3) && r.last() == Some(&3)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CvrpProblem<'a> {
    matrix: &'a DistanceMatrix,
    depot: usize,
    capacity: u32,
    segment_iterations: usize,
}

impl<'a> CvrpProblem<'a> {
    /// Creates a problem over `matrix` with the depot at matrix index `depot`.
    pub fn new(matrix: &'a DistanceMatrix, depot: usize, capacity: u32) -> Self {
        Self {
            matrix,
            depot,
            capacity,
            segment_iterations: DEFAULT_SEGMENT_ITERATIONS,
        }
    }

    /// Creates a problem from a prepared instance.
    pub fn from_instance<I>(instance: &'a ProblemInstance<I>, capacity: u32) -> Self {
        Self::new(instance.matrix(), instance.depot_index(), capacity)
    }

    /// Sets the tabu budget used on each segment.
    pub fn with_segment_iterations(mut self, iterations: usize) -> Self {
        self.segment_iterations = iterations;
        self
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Matrix index of the depot.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Evaluates a chromosome and returns its memoized fitness.
    ///
    /// The memo is only replaced when this evaluation is not worse than the
    /// recorded best, so the returned value never increases across calls.
    pub fn fitness<R: Rng>(&self, chromosome: &mut Chromosome, rng: &mut R) -> f64 {
        let tabu = TabuSearch::new(self.matrix);
        let mut total = 0.0;
        let mut order = Vec::with_capacity(chromosome.len());
        let mut route = Vec::new();

        for segment in split_by_capacity(chromosome.genes(), self.capacity) {
            route.clear();
            route.push(self.depot);
            route.extend(segment.iter().map(|g| g.node));

            let result = tabu.execute(&route, self.segment_iterations, rng);
            for position in reorder_solution(&route, &result.solution, self.depot) {
                // position 0 is the depot and never survives the rotation
                order.push(segment[position - 1]);
            }
            total += result.cost;
        }

        chromosome.consider(total, order)
    }

    /// Decodes a gene order into depot-bracketed routes of matrix indices.
    pub fn decode(&self, genes: &[Gene]) -> Vec<Vec<usize>> {
        split_by_capacity(genes, self.capacity)
            .into_iter()
            .map(|segment| {
                let mut route = Vec::with_capacity(segment.len() + 2);
                route.push(self.depot);
                route.extend(segment.iter().map(|g| g.node));
                route.push(self.depot);
                route
            })
            .collect()
    }
}
