//! Dense distance matrix.

use crate::models::Coords;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once from system coordinates (or an explicit grid) and read-only
/// afterwards. Indices are the dense ones handed out by
/// [`SystemIndex`](crate::distance::SystemIndex). The full table is
/// computed up front because the search looks the same pairs up
/// combinatorially many times.
///
/// # Examples
///
/// ```
/// use sightseer::models::Coords;
/// use sightseer::distance::DistanceMatrix;
///
/// let coords = vec![
///     Coords::new(0.0, 0.0, 0.0),
///     Coords::new(2.0, 3.0, 6.0),
///     Coords::new(4.0, 6.0, 12.0),
/// ];
/// let dm = DistanceMatrix::from_coords(&coords);
/// assert!((dm.get(0, 1) - 7.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from system coordinates.
    ///
    /// `coords[i]` must be the position of the system with index `i`.
    /// The result is symmetric with a zero diagonal.
    pub fn from_coords(coords: &[Coords]) -> Self {
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = coords[i].distance_to(&coords[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from system `from` to system `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of systems in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coords() -> Vec<Coords> {
        vec![
            Coords::new(0.0, 0.0, 0.0),
            Coords::new(2.0, 3.0, 6.0),
            Coords::new(0.0, 0.0, 9.0),
        ]
    }

    #[test]
    fn test_from_coords() {
        let dm = DistanceMatrix::from_coords(&sample_coords());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 7.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 9.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_coords_is_symmetric() {
        let dm = DistanceMatrix::from_coords(&sample_coords());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_from_data_row_major() {
        // Asymmetric on purpose, to pin down the orientation.
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 8.0, 0.0]).expect("valid grid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 8.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_coords(&[]);
        assert_eq!(dm.size(), 0);
    }
}
