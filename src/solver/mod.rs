//! Solve orchestration.
//!
//! - VRP: prepare the instance once, run the genetic algorithm
//!   [`SolverConfig::instances`] times and keep the lowest-fitness run.
//! - TSP: prepare the instance once and run a single long tabu search over
//!   every node, depot included, then anchor the tour at the depot.
//!
//! All working state lives inside one call; a [`Solver`] can be shared
//! between threads and used for unrelated requests concurrently.

mod config;
mod observer;

pub use config::SolverConfig;
pub use observer::{NoopObserver, SolveEvent, SolveObserver, TracingObserver};

use rayon::prelude::*;

use crate::distance::ProblemInstance;
use crate::error::{Result, RoutingError};
use crate::ga::{CvrpProblem, GaResult, GaRunner};
use crate::local_search::{reorder_solution, TabuSearch};
use crate::models::{Id, Node, Solution};

/// Entry point for VRP and TSP solves.
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::GaConfig;
/// use delivery_routing::models::{Coordinate, Node};
/// use delivery_routing::solver::{Solver, SolverConfig};
///
/// let nodes = vec![
///     Node::new("depot", 0, Coordinate::new(0.0, 0.0)),
///     Node::new("a", 5, Coordinate::new(1.0, 0.0)),
///     Node::new("b", 5, Coordinate::new(0.0, 1.0)),
///     Node::new("c", 5, Coordinate::new(-1.0, 0.0)),
/// ];
/// let config = SolverConfig::default()
///     .with_ga(GaConfig::default().with_population_size(20).with_generations(10))
///     .with_seed(1);
///
/// let solution = Solver::new(config).solve_vrp(nodes, &"depot", 10).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// for route in solution.routes() {
///     assert!(route.load() <= 10);
///     assert_eq!(route.stops().first(), Some(&"depot"));
///     assert_eq!(route.stops().last(), Some(&"depot"));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Solver<O = NoopObserver> {
    config: SolverConfig,
    observer: O,
}

impl Solver<NoopObserver> {
    /// Creates a solver that reports no progress.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl<O: SolveObserver> Solver<O> {
    /// Replaces the progress observer.
    pub fn with_observer<P: SolveObserver>(self, observer: P) -> Solver<P> {
        Solver {
            config: self.config,
            observer,
        }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Partitions the nodes into capacity-bounded depot tours.
    ///
    /// # Errors
    ///
    /// Returns preparation errors ([`RoutingError::InsufficientNodes`],
    /// [`RoutingError::DepotNotFound`]), [`RoutingError::InvalidConfig`],
    /// or [`RoutingError::DemandExceedsCapacity`] when a single stop cannot
    /// fit in any vehicle.
    pub fn solve_vrp<I>(
        &self,
        nodes: impl IntoIterator<Item = Node<I>>,
        depot_id: &I,
        capacity: u32,
    ) -> Result<Solution<I>>
    where
        I: Id + Sync,
    {
        self.config.validate()?;
        let instance = ProblemInstance::prepare(nodes, depot_id)?;
        self.solve_vrp_instance(&instance, capacity)
    }

    /// Runs the VRP search on an already prepared instance.
    #[tracing::instrument(
        level = "info",
        name = "vrp",
        skip_all,
        fields(nodes = instance.nodes().len(), capacity = capacity)
    )]
    pub fn solve_vrp_instance<I>(
        &self,
        instance: &ProblemInstance<I>,
        capacity: u32,
    ) -> Result<Solution<I>>
    where
        I: Id + Sync,
    {
        self.config.validate()?;
        if let Some(node) = instance.nodes().iter().find(|n| n.demand() > capacity) {
            return Err(RoutingError::DemandExceedsCapacity {
                demand: node.demand(),
                capacity,
            });
        }

        let genes = instance.genes();
        let problem = CvrpProblem::from_instance(instance, capacity)
            .with_segment_iterations(self.config.segment_tabu_iterations);

        let solve_one = |run: usize| -> Result<GaResult> {
            let mut rng = self.config.rng_for(run);
            let result = GaRunner::run(
                &problem,
                &genes,
                &self.config.ga,
                &mut rng,
                |generation, best_fitness| {
                    self.observer.on_event(&SolveEvent::GenerationCompleted {
                        instance: run,
                        generation,
                        best_fitness,
                    })
                },
            )?;
            tracing::info!(
                instance = run,
                fitness = result.fitness(),
                routes = result.routes.len(),
                "genetic algorithm run finished"
            );
            self.observer.on_event(&SolveEvent::InstanceCompleted {
                instance: run,
                fitness: result.fitness(),
                routes: result.routes.len(),
            });
            Ok(result)
        };

        let results: Vec<GaResult> = if self.config.parallel {
            (0..self.config.instances)
                .into_par_iter()
                .map(&solve_one)
                .collect::<Result<_>>()?
        } else {
            (0..self.config.instances)
                .map(&solve_one)
                .collect::<Result<_>>()?
        };

        let mut best: Option<GaResult> = None;
        for result in results {
            if best.as_ref().map_or(true, |b| result.fitness() < b.fitness()) {
                best = Some(result);
            }
        }
        let Some(best) = best else {
            return Err(RoutingError::invalid_config("at least one instance is required"));
        };

        let routes = best
            .routes
            .iter()
            .map(|indices| instance.route_from_indices(indices))
            .collect();
        tracing::info!(fitness = best.fitness(), "best route set selected");
        Ok(Solution::new(routes, best.fitness()))
    }

    /// Finds a single depot tour through every node.
    ///
    /// # Errors
    ///
    /// Returns preparation errors ([`RoutingError::InsufficientNodes`],
    /// [`RoutingError::DepotNotFound`]).
    pub fn solve_tsp<I: Id>(
        &self,
        nodes: impl IntoIterator<Item = Node<I>>,
        depot_id: &I,
    ) -> Result<Solution<I>> {
        let instance = ProblemInstance::prepare(nodes, depot_id)?;
        Ok(self.solve_tsp_instance(&instance))
    }

    /// Runs the single-tour search on an already prepared instance.
    #[tracing::instrument(
        level = "info",
        name = "tsp",
        skip_all,
        fields(nodes = instance.nodes().len())
    )]
    pub fn solve_tsp_instance<I: Id>(&self, instance: &ProblemInstance<I>) -> Solution<I> {
        let depot = instance.depot_index();
        let tour: Vec<usize> = (0..instance.nodes().len()).collect();
        let mut rng = self.config.rng_for(0);

        let result = TabuSearch::new(instance.matrix()).execute(
            &tour,
            self.config.tour_tabu_iterations,
            &mut rng,
        );

        let mut indices = Vec::with_capacity(tour.len() + 1);
        indices.push(depot);
        indices.extend(
            reorder_solution(&tour, &result.solution, depot)
                .into_iter()
                .map(|p| tour[p]),
        );
        indices.push(depot);

        tracing::info!(cost = result.cost, "tour search finished");
        self.observer
            .on_event(&SolveEvent::TourCompleted { cost: result.cost });

        Solution::new(vec![instance.route_from_indices(&indices)], result.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaConfig;
    use crate::models::Coordinate;
    use std::sync::Mutex;

    fn nodes() -> Vec<Node<u32>> {
        vec![
            Node::new(100, 0, Coordinate::new(0.0, 0.0)),
            Node::new(1, 5, Coordinate::new(-10.0, 0.0)),
            Node::new(2, 5, Coordinate::new(-11.0, 1.0)),
            Node::new(3, 5, Coordinate::new(10.0, 0.0)),
            Node::new(4, 5, Coordinate::new(11.0, 1.0)),
        ]
    }

    fn small_config() -> SolverConfig {
        SolverConfig::default()
            .with_ga(GaConfig::default().with_population_size(20).with_generations(15))
            .with_instances(3)
            .with_tour_tabu_iterations(200)
            .with_seed(17)
    }

    #[test]
    fn test_vrp_routes_anchor_at_depot_and_respect_capacity() {
        let solution = Solver::new(small_config())
            .solve_vrp(nodes(), &100, 10)
            .expect("solvable");
        assert_eq!(solution.num_served(), 4);
        for route in solution.routes() {
            assert_eq!(route.stops().first(), Some(&100));
            assert_eq!(route.stops().last(), Some(&100));
            assert!(route.load() <= 10);
        }
        assert!(solution.cost().is_finite());
    }

    #[test]
    fn test_vrp_parallel_matches_sequential() {
        let sequential = Solver::new(small_config())
            .solve_vrp(nodes(), &100, 10)
            .expect("solvable");
        let parallel = Solver::new(small_config().with_parallel(true))
            .solve_vrp(nodes(), &100, 10)
            .expect("solvable");
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_vrp_reports_events() {
        let events = Mutex::new(Vec::new());
        let solver = Solver::new(small_config().with_instances(2))
            .with_observer(|e: &SolveEvent| events.lock().expect("lock").push(e.clone()));
        solver.solve_vrp(nodes(), &100, 10).expect("solvable");

        let events = events.into_inner().expect("lock");
        let completed = events
            .iter()
            .filter(|e| matches!(e, SolveEvent::InstanceCompleted { .. }))
            .count();
        let generations = events
            .iter()
            .filter(|e| matches!(e, SolveEvent::GenerationCompleted { .. }))
            .count();
        assert_eq!(completed, 2);
        assert_eq!(generations, 2 * 15);
    }

    #[test]
    fn test_vrp_demand_exceeding_capacity() {
        let mut input = nodes();
        input.push(Node::new(5, 30, Coordinate::new(1.0, 1.0)));
        let err = Solver::new(small_config())
            .solve_vrp(input, &100, 10)
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::DemandExceedsCapacity {
                demand: 30,
                capacity: 10
            }
        );
    }

    #[test]
    fn test_vrp_invalid_config() {
        let err = Solver::new(small_config().with_instances(0))
            .solve_vrp(nodes(), &100, 10)
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_depot_demand_ignored_for_capacity() {
        let mut input = nodes();
        input[0] = Node::new(100, 99, Coordinate::new(0.0, 0.0));
        assert!(Solver::new(small_config()).solve_vrp(input, &100, 10).is_ok());
    }

    #[test]
    fn test_tsp_single_tour_visits_all() {
        let solution = Solver::new(small_config())
            .solve_tsp(nodes(), &100)
            .expect("solvable");
        assert_eq!(solution.num_routes(), 1);
        let stops = solution.routes()[0].stops();
        assert_eq!(stops.len(), 6);
        assert_eq!(stops.first(), Some(&100));
        assert_eq!(stops.last(), Some(&100));
        let mut inner = stops[1..5].to_vec();
        inner.sort();
        assert_eq!(inner, vec![1, 2, 3, 4]);
        assert!((solution.total_distance() - solution.cost()).abs() < 1e-9);
    }

    #[test]
    fn test_tsp_reports_event() {
        let events = Mutex::new(Vec::new());
        Solver::new(small_config())
            .with_observer(|e: &SolveEvent| events.lock().expect("lock").push(e.clone()))
            .solve_tsp(nodes(), &100)
            .expect("solvable");
        let events = events.into_inner().expect("lock");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SolveEvent::TourCompleted { .. }));
    }
}
