//! Boundary helpers for road directions services.
//!
//! The optimizer works on planar distances. Real travel time and road
//! distance come from an external service, reached through
//! [`DirectionsProvider`]. No HTTP client lives in this crate.

mod path;

pub use path::{coordinate_path, share_link, waypoint_batches};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Coordinate;

/// Travel totals for a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Driving time in seconds.
    pub duration: f64,
    /// Road distance in kilometres.
    pub distance: f64,
}

impl std::ops::Add for TripSummary {
    type Output = TripSummary;

    fn add(self, rhs: TripSummary) -> TripSummary {
        TripSummary {
            duration: self.duration + rhs.duration,
            distance: self.distance + rhs.distance,
        }
    }
}

/// Looks up road travel totals for a sequence of points.
pub trait DirectionsProvider {
    /// Summary of the trip visiting `coords` in order.
    fn route_summary(&self, coords: &[Coordinate]) -> Result<TripSummary>;
}

/// Summarizes a route of any length through a provider that accepts at most
/// `max_points` points per call.
///
/// The route is cut with [`waypoint_batches`] and the batch totals are
/// summed. The first failing batch aborts the lookup.
///
/// # Examples
///
/// ```
/// use delivery_routing::directions::{summarize_route, DirectionsProvider, TripSummary};
/// use delivery_routing::models::Coordinate;
/// use delivery_routing::Result;
///
/// struct Straight;
///
/// impl DirectionsProvider for Straight {
///     fn route_summary(&self, coords: &[Coordinate]) -> Result<TripSummary> {
///         let distance: f64 = coords.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
///         Ok(TripSummary { duration: distance * 60.0, distance })
///     }
/// }
///
/// let route: Vec<_> = (0..10).map(|i| Coordinate::new(i as f64, 0.0)).collect();
/// let summary = summarize_route(&Straight, &route, 4).unwrap();
/// assert_eq!(summary.distance, 9.0);
/// ```
pub fn summarize_route<P>(
    provider: &P,
    coords: &[Coordinate],
    max_points: usize,
) -> Result<TripSummary>
where
    P: DirectionsProvider + ?Sized,
{
    let batches = waypoint_batches(coords, max_points)?;
    let mut total = TripSummary::default();
    for batch in &batches {
        total = total + provider.route_summary(batch)?;
    }
    tracing::debug!(
        batches = batches.len(),
        duration = total.duration,
        distance = total.distance,
        "route summarized"
    );
    Ok(total)
}
