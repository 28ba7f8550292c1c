//! Solve results.

use serde::{Deserialize, Serialize};

use super::Route;

/// The route set returned by a solve.
///
/// `cost` is the optimizer's objective for the chosen result: the best
/// chromosome fitness for VRP, the tabu tour cost for TSP.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Route, Solution};
///
/// let sol = Solution::new(
///     vec![
///         Route::new(vec![0, 1, 0], 5, 2.0),
///         Route::new(vec![0, 2, 3, 0], 8, 6.0),
///     ],
///     8.0,
/// );
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert!((sol.total_distance() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<I> {
    routes: Vec<Route<I>>,
    cost: f64,
}

impl<I> Solution<I> {
    /// Creates a solution.
    pub fn new(routes: Vec<Route<I>>, cost: f64) -> Self {
        Self { routes, cost }
    }

    /// Routes in output order.
    pub fn routes(&self) -> &[Route<I>] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customer stops across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Objective value reported by the optimizer.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sum of route lengths.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.distance()).sum()
    }

    /// Consumes the solution, returning the stop lists of each route.
    pub fn into_stop_lists(self) -> Vec<Vec<I>> {
        self.routes.into_iter().map(Route::into_stops).collect()
    }
}
