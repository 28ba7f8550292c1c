//! Delivery nodes, coordinates and chromosome genes.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Identifier of an external address record.
///
/// Any cloneable, comparable, hashable type qualifies.
pub trait Id: Clone + Eq + Hash + fmt::Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + fmt::Debug {}

/// A raw coordinate pair.
///
/// Distances between coordinates are planar Euclidean over the raw pair,
/// which is adequate for short-range delivery areas.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
///
/// let c: Coordinate = "52.52, 13.40".parse().unwrap();
/// assert_eq!(c.lat, 52.52);
/// assert_eq!(c.lon, 13.40);
/// assert!((c.distance_to(&Coordinate::new(52.52, 14.40)) - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// First component (latitude).
    pub lat: f64,
    /// Second component (longitude).
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.lat - other.lat;
        let dy = self.lon - other.lon;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RoutingError::InvalidCoordinate {
            input: s.to_string(),
        };
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid());
        }
        Ok(Self { lat, lon })
    }
}

/// A delivery point (or the depot) taking part in a solve.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Coordinate, Node};
///
/// let node = Node::new("addr-7", 4, Coordinate::new(1.0, 2.0)).with_label("Main St 1");
/// assert_eq!(node.id(), &"addr-7");
/// assert_eq!(node.demand(), 4);
/// assert_eq!(node.label(), Some("Main St 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<I> {
    id: I,
    demand: u32,
    coordinate: Coordinate,
    label: Option<String>,
}

impl<I> Node<I> {
    /// Creates a node.
    pub fn new(id: I, demand: u32, coordinate: Coordinate) -> Self {
        Self {
            id,
            demand,
            coordinate,
            label: None,
        }
    }

    /// Attaches a human readable label (usually the street address).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Identifier of the external address record.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Capacity units delivered at this node.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Location of this node.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Optional label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_demand(&mut self, demand: u32) {
        self.demand = demand;
    }
}

/// A customer reference inside a chromosome: matrix index plus demand.
///
/// The depot is never a gene; it is re-inserted while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    /// Index of the node in the distance matrix.
    pub node: usize,
    /// Demand of that node.
    pub demand: u32,
}

impl Gene {
    /// Creates a gene.
    pub fn new(node: usize, demand: u32) -> Self {
        Self { node, demand }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_parse() {
        let c: Coordinate = "40.4168,-3.7038".parse().expect("valid");
        assert_eq!(c, Coordinate::new(40.4168, -3.7038));
    }

    #[test]
    fn test_coordinate_parse_whitespace() {
        let c: Coordinate = " 1.5 ,  2.5 ".parse().expect("valid");
        assert_eq!(c, Coordinate::new(1.5, 2.5));
    }

    #[test]
    fn test_coordinate_parse_invalid() {
        for input in ["", "1.0", "1.0,2.0,3.0", "a,b", "1.0,", "NaN,1.0", "inf,0"] {
            let err = input.parse::<Coordinate>().unwrap_err();
            assert_eq!(
                err,
                RoutingError::InvalidCoordinate {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_coordinate_display_roundtrip() {
        let c = Coordinate::new(3.25, -7.5);
        assert_eq!(c.to_string(), "3.25,-7.5");
        assert_eq!(c.to_string().parse::<Coordinate>().expect("valid"), c);
    }

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_node_accessors() {
        let mut n = Node::new(7u32, 3, Coordinate::new(1.0, 1.0));
        assert_eq!(*n.id(), 7);
        assert_eq!(n.demand(), 3);
        assert!(n.label().is_none());
        n.set_demand(0);
        assert_eq!(n.demand(), 0);
    }

    #[test]
    fn test_gene_equality() {
        assert_eq!(Gene::new(1, 5), Gene::new(1, 5));
        assert_ne!(Gene::new(1, 5), Gene::new(2, 5));
    }
}
