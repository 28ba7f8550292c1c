//! Domain model types for delivery routing.
//!
//! Nodes carry an external identifier, a demand and a coordinate. Genes are
//! the chromosome-level view of a customer node. Routes and solutions are the
//! depot-anchored output handed back to callers.

mod node;
mod route;
mod solution;

pub use node::{Coordinate, Gene, Id, Node};
pub use route::Route;
pub use solution::Solution;
