//! Problem instance preparation.
//!
//! Turns the candidate nodes of one solve request into the structures the
//! optimizers work on: a coordinate list, a distance matrix and a node list
//! that ends with the depot.

use crate::error::{Result, RoutingError};
use crate::models::{Coordinate, Gene, Id, Node, Route};

use super::DistanceMatrix;

/// Minimum number of nodes (depot included) a solve needs.
pub const MIN_NODES: usize = 3;

/// Matrix-indexed view of one solve request.
///
/// `nodes[i]`, `coordinates[i]` and row `i` of the matrix describe the same
/// location. The depot is always the last entry.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::ProblemInstance;
/// use delivery_routing::models::{Coordinate, Node};
///
/// let nodes = vec![
///     Node::new("depot", 3, Coordinate::new(0.0, 0.0)),
///     Node::new("a", 5, Coordinate::new(3.0, 4.0)),
///     Node::new("b", 2, Coordinate::new(6.0, 8.0)),
/// ];
/// let instance = ProblemInstance::prepare(nodes, &"depot").unwrap();
/// assert_eq!(instance.depot_index(), 2);
/// assert_eq!(instance.depot().id(), &"depot");
/// assert_eq!(instance.depot().demand(), 0);
/// assert!((instance.matrix().get(0, 2) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance<I> {
    coordinates: Vec<Coordinate>,
    matrix: DistanceMatrix,
    nodes: Vec<Node<I>>,
}

impl<I: Id> ProblemInstance<I> {
    /// Builds the instance from the currently unassigned nodes.
    ///
    /// Non-depot nodes keep their input order and the depot is appended last
    /// with its demand forced to zero. When several candidates carry
    /// `depot_id`, the first one is the depot and the others are dropped.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InsufficientNodes`] if fewer than [`MIN_NODES`]
    ///   candidates are given, or remain once duplicate depots are dropped.
    /// - [`RoutingError::DepotNotFound`] if no candidate has `depot_id`.
    pub fn prepare(candidates: impl IntoIterator<Item = Node<I>>, depot_id: &I) -> Result<Self> {
        let mut nodes: Vec<Node<I>> = candidates.into_iter().collect();
        if nodes.len() < MIN_NODES {
            return Err(RoutingError::InsufficientNodes {
                available: nodes.len(),
            });
        }

        let depot_pos = nodes
            .iter()
            .position(|n| n.id() == depot_id)
            .ok_or(RoutingError::DepotNotFound)?;
        let mut depot = nodes.remove(depot_pos);
        let before = nodes.len();
        nodes.retain(|n| n.id() != depot_id);
        if nodes.len() < before {
            tracing::warn!(
                depot = ?depot_id,
                dropped = before - nodes.len(),
                "duplicate depot candidates dropped"
            );
        }
        depot.set_demand(0);
        nodes.push(depot);
        if nodes.len() < MIN_NODES {
            return Err(RoutingError::InsufficientNodes {
                available: nodes.len(),
            });
        }

        let coordinates: Vec<Coordinate> = nodes.iter().map(|n| n.coordinate()).collect();
        let matrix = DistanceMatrix::from_coordinates(&coordinates);

        tracing::debug!(nodes = nodes.len(), depot = ?depot_id, "prepared distance matrix");

        Ok(Self {
            coordinates,
            matrix,
            nodes,
        })
    }
}

impl<I> ProblemInstance<I> {
    /// Coordinates in matrix order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Pairwise distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Nodes in matrix order, depot last.
    pub fn nodes(&self) -> &[Node<I>] {
        &self.nodes
    }

    /// Matrix index of the depot.
    pub fn depot_index(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The depot node.
    pub fn depot(&self) -> &Node<I> {
        &self.nodes[self.depot_index()]
    }

    /// Number of customer nodes (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// One gene per customer node, in matrix order.
    pub fn genes(&self) -> Vec<Gene> {
        self.nodes[..self.depot_index()]
            .iter()
            .enumerate()
            .map(|(i, n)| Gene::new(i, n.demand()))
            .collect()
    }

    /// Maps a sequence of matrix indices onto a route of identifiers.
    ///
    /// The indices are expected to start and end at the depot.
    pub fn route_from_indices(&self, indices: &[usize]) -> Route<I>
    where
        I: Clone,
    {
        let stops = indices.iter().map(|&i| self.nodes[i].id().clone()).collect();
        let load = indices.iter().map(|&i| self.nodes[i].demand()).sum();
        Route::new(stops, load, self.matrix.path_length(indices))
    }
}
