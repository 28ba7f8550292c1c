//! Coordinate strings for directions services and share links.

use std::fmt;

use crate::error::{Result, RoutingError};
use crate::models::Coordinate;

/// Joins coordinates into a `"lat,lon;lat,lon;..."` path.
///
/// # Examples
///
/// ```
/// use delivery_routing::directions::coordinate_path;
/// use delivery_routing::models::Coordinate;
///
/// let path = coordinate_path(&[Coordinate::new(50.0, 30.5), Coordinate::new(50.1, 30.25)]);
/// assert_eq!(path, "50,30.5;50.1,30.25");
/// ```
pub fn coordinate_path(coords: &[Coordinate]) -> String {
    coords
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Splits a path into chunks of at most `max_points` points.
///
/// Consecutive chunks share their boundary point, so every leg of the
/// original path belongs to exactly one chunk. Paths with fewer than two
/// points produce no chunks.
///
/// # Errors
///
/// [`RoutingError::InvalidConfig`] when `max_points < 2`.
pub fn waypoint_batches(coords: &[Coordinate], max_points: usize) -> Result<Vec<&[Coordinate]>> {
    if max_points < 2 {
        return Err(RoutingError::invalid_config(
            "a waypoint batch needs at least two points",
        ));
    }
    if coords.len() < 2 {
        return Ok(Vec::new());
    }

    let step = max_points - 1;
    let mut batches = Vec::with_capacity((coords.len() - 1).div_ceil(step));
    let mut start = 0;
    while start < coords.len() - 1 {
        let end = (start + max_points).min(coords.len());
        batches.push(&coords[start..end]);
        start += step;
    }
    Ok(batches)
}

/// Builds a shareable link for one route.
///
/// The result has the form `base?depot=lat,lon&point_1=lat,lon,label&...`,
/// with stops numbered from 1 in visiting order.
///
/// # Examples
///
/// ```
/// use delivery_routing::directions::share_link;
/// use delivery_routing::models::Coordinate;
///
/// let link = share_link(
///     "https://maps.example/",
///     Coordinate::new(1.0, 2.0),
///     &[(Coordinate::new(3.0, 4.0), 5), (Coordinate::new(5.5, 6.0), 7)],
/// );
/// assert_eq!(link, "https://maps.example/?depot=1,2&point_1=3,4,5&point_2=5.5,6,7");
/// ```
pub fn share_link<L: fmt::Display>(
    base: &str,
    depot: Coordinate,
    stops: &[(Coordinate, L)],
) -> String {
    let mut link = format!("{}?depot={}", base, depot);
    for (i, (coordinate, label)) in stops.iter().enumerate() {
        link.push_str(&format!("&point_{}={},{}", i + 1, coordinate, label));
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_coordinate_path_empty() {
        assert_eq!(coordinate_path(&[]), "");
    }

    #[test]
    fn test_batches_share_boundaries() {
        let coords = line(7);
        let batches = waypoint_batches(&coords, 3).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0], &coords[0..3]);
        assert_eq!(batches[1], &coords[2..5]);
        assert_eq!(batches[2], &coords[4..7]);
    }

    #[test]
    fn test_batches_short_tail() {
        let coords = line(6);
        let batches = waypoint_batches(&coords, 3).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2], &coords[4..6]);
    }

    #[test]
    fn test_batches_single_chunk() {
        let coords = line(4);
        let batches = waypoint_batches(&coords, 25).unwrap();
        assert_eq!(batches, vec![&coords[..]]);
    }

    #[test]
    fn test_batches_degenerate() {
        assert!(waypoint_batches(&line(1), 5).unwrap().is_empty());
        assert!(waypoint_batches(&line(5), 1).is_err());
    }

    #[test]
    fn test_share_link_depot_only() {
        let stops: [(Coordinate, &str); 0] = [];
        assert_eq!(
            share_link("https://x/", Coordinate::new(1.5, 2.0), &stops),
            "https://x/?depot=1.5,2"
        );
    }
}
