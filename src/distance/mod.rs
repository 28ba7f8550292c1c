//! Distance matrices and instance preparation.
//!
//! - [`DistanceMatrix`] — dense planar Euclidean matrix
//! - [`ProblemInstance`] — coordinates, matrix and depot-last node list of one solve

mod instance;
mod matrix;

pub use instance::{ProblemInstance, MIN_NODES};
pub use matrix::DistanceMatrix;
