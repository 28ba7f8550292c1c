//! Depot-anchored routes.

use serde::{Deserialize, Serialize};

/// An ordered sequence of node identifiers served by one vehicle.
///
/// The first and last stop are always the depot.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Route;
///
/// let route = Route::new(vec!["depot", "a", "b", "depot"], 7, 12.5);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.customers(), &["a", "b"]);
/// assert_eq!(route.load(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<I> {
    stops: Vec<I>,
    load: u32,
    distance: f64,
}

impl<I> Route<I> {
    /// Creates a route from its full stop list (depot at both ends).
    pub fn new(stops: Vec<I>, load: u32, distance: f64) -> Self {
        Self {
            stops,
            load,
            distance,
        }
    }

    /// All stops, depot first and last.
    pub fn stops(&self) -> &[I] {
        &self.stops
    }

    /// Stops between the two depot visits.
    pub fn customers(&self) -> &[I] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of customer stops (depot excluded).
    pub fn len(&self) -> usize {
        self.customers().len()
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.customers().is_empty()
    }

    /// Summed demand of the served customers.
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Planar length from depot to depot.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Consumes the route, returning its stops.
    pub fn into_stops(self) -> Vec<I> {
        self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_customers() {
        let r = Route::new(vec![0, 3, 1, 0], 9, 4.0);
        assert_eq!(r.stops(), &[0, 3, 1, 0]);
        assert_eq!(r.customers(), &[3, 1]);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.distance(), 4.0);
    }

    #[test]
    fn test_route_depot_only() {
        let r = Route::new(vec![0, 0], 0, 0.0);
        assert!(r.is_empty());
        let empty: Route<u8> = Route::new(vec![], 0, 0.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_route_into_stops() {
        let r = Route::new(vec!["d", "x", "d"], 1, 2.0);
        assert_eq!(r.into_stops(), vec!["d", "x", "d"]);
    }
}
