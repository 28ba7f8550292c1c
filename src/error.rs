//! Error type shared by instance preparation, configuration and the
//! directions helpers.
//!
//! The optimizers themselves never fail: once an instance is prepared they
//! always return the best result found within their budget.

use std::fmt;

/// Errors raised while preparing or configuring a solve.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Fewer than three nodes (depot plus two stops) were available.
    InsufficientNodes {
        /// Number of nodes supplied, depot included.
        available: usize,
    },
    /// The requested depot identifier is not among the candidate nodes.
    DepotNotFound,
    /// A single stop needs more than one vehicle can carry.
    DemandExceedsCapacity {
        /// Demand of the stop.
        demand: u32,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// A coordinate string could not be parsed as `"lat,lon"`.
    InvalidCoordinate {
        /// The offending input.
        input: String,
    },
    /// A configuration value cannot drive the optimizer.
    InvalidConfig {
        /// Human readable reason.
        reason: String,
    },
    /// A directions collaborator reported a failure.
    Directions {
        /// Message reported by the collaborator.
        message: String,
    },
}

impl RoutingError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        RoutingError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InsufficientNodes { available } => write!(
                f,
                "not enough available addresses: {} given, at least 3 required",
                available
            ),
            RoutingError::DepotNotFound => {
                write!(f, "depot not found among unassigned addresses")
            }
            RoutingError::DemandExceedsCapacity { demand, capacity } => write!(
                f,
                "demand {} of a single stop exceeds vehicle capacity {}",
                demand, capacity
            ),
            RoutingError::InvalidCoordinate { input } => {
                write!(f, "invalid coordinate string {:?}, expected \"lat,lon\"", input)
            }
            RoutingError::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
            RoutingError::Directions { message } => {
                write!(f, "directions lookup failed: {}", message)
            }
        }
    }
}

impl std::error::Error for RoutingError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
