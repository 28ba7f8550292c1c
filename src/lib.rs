//! # delivery-routing
//!
//! Delivery route optimization over a set of addresses and a depot:
//! capacity-bounded multi-vehicle routing (VRP) through a genetic algorithm
//! whose segments are refined by tabu search, and single-vehicle tours (TSP)
//! through tabu search alone.
//!
//! ## Modules
//!
//! - [`models`] — Nodes, coordinates, genes, routes and solutions
//! - [`distance`] — Distance matrix and problem instance preparation
//! - [`local_search`] — Swap-neighbourhood tabu search
//! - [`ga`] — Genetic algorithm with capacity segmentation
//! - [`solver`] — VRP and TSP orchestration, configuration, progress events
//! - [`import`] — Address records to nodes, with per-record failures
//! - [`directions`] — Road directions boundary and share links
//! - [`error`] — Error type

pub mod directions;
pub mod distance;
pub mod error;
pub mod ga;
pub mod import;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, RoutingError};
