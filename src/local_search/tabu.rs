//! Swap-neighbourhood tabu search over a cyclic tour.
//!
//! # Algorithm
//!
//! The search works on positions `0..n` of a route and starts from the
//! identity ordering. Every iteration:
//!
//! 1. Shuffles the list of all ordered position pairs `(j, k)`, `j != k`.
//! 2. Scans it and, for each pair whose unordered form is not tabu, swaps
//!    the two positions of the current best ordering and evaluates the
//!    cyclic cost. The first strictly improving swap becomes the new best
//!    and ends the scan (first improvement).
//! 3. If nothing improved, the tabu list is cleared.
//! 4. The last scanned pair is recorded as tabu.
//!
//! The depot is an ordinary slot during the search. [`reorder_solution`]
//! rotates the result afterwards so it reads from the stop after the depot.
//!
//! # Complexity
//!
//! O(n³) per iteration in the worst case (n² moves, O(n) cost each).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;

/// An unordered pair of route positions forbidden while in the tabu list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabuMove {
    low: usize,
    high: usize,
}

impl TabuMove {
    /// Creates the move swapping positions `j` and `k`.
    pub fn new(j: usize, k: usize) -> Self {
        Self {
            low: j.min(k),
            high: j.max(k),
        }
    }

    /// The two positions, smaller first.
    pub fn positions(&self) -> (usize, usize) {
        (self.low, self.high)
    }
}

/// Outcome of a tabu search run.
#[derive(Debug, Clone, PartialEq)]
pub struct TabuResult {
    /// Best ordering found, as positions into the searched route.
    pub solution: Vec<usize>,
    /// Cyclic cost of `solution`.
    pub cost: f64,
}

/// Tabu search bound to one distance matrix.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::DistanceMatrix;
/// use delivery_routing::local_search::TabuSearch;
/// use delivery_routing::models::Coordinate;
/// use rand::SeedableRng;
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&coords);
/// let tabu = TabuSearch::new(&dm);
/// let route = [0, 1, 2, 3];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let result = tabu.execute(&route, 50, &mut rng);
/// assert!(result.cost <= tabu.cyclic_cost(&route, &[0, 1, 2, 3]));
/// assert!((result.cost - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TabuSearch<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> TabuSearch<'a> {
    /// Creates a search over the given matrix.
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// Searches for a low-cost cyclic ordering of `route`.
    ///
    /// `route` holds matrix indices. The returned solution is a permutation
    /// of `0..route.len()` whose cost never exceeds the identity ordering.
    pub fn execute<R: Rng>(
        &self,
        route: &[usize],
        max_iterations: usize,
        rng: &mut R,
    ) -> TabuResult {
        let n = route.len();
        let mut best: Vec<usize> = (0..n).collect();
        let mut best_cost = self.cyclic_cost(route, &best);

        let mut moves: Vec<(usize, usize)> = (0..n)
            .flat_map(|j| (0..n).filter(move |&k| k != j).map(move |k| (j, k)))
            .collect();
        if moves.is_empty() {
            return TabuResult {
                solution: best,
                cost: best_cost,
            };
        }

        let mut tabu_list: HashSet<TabuMove> = HashSet::new();
        let mut candidate = best.clone();
        let mut resets = 0usize;

        for _ in 0..max_iterations {
            moves.shuffle(rng);

            let mut found_move = false;
            let mut scanned = None;
            for &(j, k) in &moves {
                let mv = TabuMove::new(j, k);
                scanned = Some(mv);
                if tabu_list.contains(&mv) {
                    continue;
                }

                candidate.copy_from_slice(&best);
                candidate.swap(j, k);
                let cost = self.cyclic_cost(route, &candidate);
                if cost < best_cost {
                    best.copy_from_slice(&candidate);
                    best_cost = cost;
                    found_move = true;
                    break;
                }
            }

            if !found_move {
                tabu_list.clear();
                resets += 1;
            }
            if let Some(mv) = scanned {
                tabu_list.insert(mv);
            }
        }

        tracing::trace!(
            stops = n,
            max_iterations,
            resets,
            cost = best_cost,
            "tabu search finished"
        );

        TabuResult {
            solution: best,
            cost: best_cost,
        }
    }

    /// Cost of the closed tour visiting `route[solution[0]], route[solution[1]], ...`
    /// and returning to the first entry.
    pub fn cyclic_cost(&self, route: &[usize], solution: &[usize]) -> f64 {
        let n = solution.len();
        (0..n)
            .map(|i| {
                let prev = if i == 0 { n - 1 } else { i - 1 };
                self.matrix.get(route[solution[prev]], route[solution[i]])
            })
            .sum()
    }
}

/// Rotates a tabu solution so it starts right after the depot's slot.
///
/// The depot's own position is dropped from the result, so the output lists
/// the remaining positions in tour order, ready to be bracketed by the depot.
/// If `depot` does not occur in `route` the solution is returned unchanged.
///
/// # Examples
///
/// ```
/// use delivery_routing::local_search::reorder_solution;
///
/// // route positions: 0 → node 7, 1 → node 3 (depot), 2 → node 9
/// let route = [7, 3, 9];
/// assert_eq!(reorder_solution(&route, &[2, 0, 1], 3), vec![2, 0]);
/// assert_eq!(reorder_solution(&route, &[1, 2, 0], 3), vec![2, 0]);
/// ```
pub fn reorder_solution(route: &[usize], solution: &[usize], depot: usize) -> Vec<usize> {
    let Some(depot_pos) = route.iter().position(|&node| node == depot) else {
        return solution.to_vec();
    };
    let Some(index) = solution.iter().position(|&p| p == depot_pos) else {
        return solution.to_vec();
    };
    solution[index + 1..]
        .iter()
        .chain(&solution[..index])
        .copied()
        .collect()
}
