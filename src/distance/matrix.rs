//! Dense distance matrix.

use crate::models::Coordinate;

/// Pairwise distances between the prepared nodes, row-major.
///
/// Row and column `i` belong to node `i` of the instance; the depot takes
/// the last index. Built once per solve and only read afterwards, so it can
/// be shared freely between parallel runs.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Coordinate;
/// use delivery_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(3.0, 4.0),
///     Coordinate::new(6.0, 8.0),
/// ]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.path_length(&[0, 1, 2]) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    cells: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    /// Planar Euclidean distances between `coordinates`.
    ///
    /// The diagonal stays zero and each pair is computed once, so
    /// `get(i, j) == get(j, i)` holds exactly.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let n = coordinates.len();
        let mut cells = vec![0.0; n * n];
        for (i, a) in coordinates.iter().enumerate() {
            for (j, b) in coordinates.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }
        Self { cells, n }
    }

    /// Distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    /// Number of nodes covered.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Whether `get(i, j)` and `get(j, i)` differ by at most `tol` everywhere.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }

    /// Length of the open path visiting `indices` in order.
    pub fn path_length(&self, indices: &[usize]) -> f64 {
        indices.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(3.0, 4.0),
            Coordinate::new(0.0, 8.0),
        ])
    }

    #[test]
    fn test_from_coordinates() {
        let dm = triangle();
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(2, 0) - 8.0).abs() < 1e-10);
        assert_eq!(dm.get(1, 1), 0.0);
    }

    #[test]
    fn test_coordinates_yield_symmetric_matrix() {
        let dm = DistanceMatrix::from_coordinates(&[
            Coordinate::new(1.0, -2.0),
            Coordinate::new(-4.5, 3.0),
            Coordinate::new(7.0, 0.25),
            Coordinate::new(1.0, -2.0),
        ]);
        assert!(dm.is_symmetric(0.0));
        // duplicated point
        assert_eq!(dm.get(0, 3), 0.0);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_coordinates(&[]);
        assert_eq!(dm.size(), 0);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_path_length() {
        let dm = triangle();
        // 0 → 1 → 2 → 0 = 5 + 5 + 8
        assert!((dm.path_length(&[0, 1, 2, 0]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.path_length(&[1]), 0.0);
        assert_eq!(dm.path_length(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric_zero_diagonal(
            points in prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 0..25)
        ) {
            let coords: Vec<Coordinate> =
                points.iter().map(|&(lat, lon)| Coordinate::new(lat, lon)).collect();
            let dm = DistanceMatrix::from_coordinates(&coords);
            for i in 0..dm.size() {
                prop_assert_eq!(dm.get(i, i), 0.0);
                for j in 0..dm.size() {
                    prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                    prop_assert!(dm.get(i, j) >= 0.0);
                }
            }
        }
    }
}
