//! Local search for route ordering.
//!
//! - [`TabuSearch`] — swap-move tabu search over a cyclic tour
//! - [`reorder_solution`] — rotate a tabu result to start after the depot

mod tabu;

pub use tabu::{reorder_solution, TabuMove, TabuResult, TabuSearch};
