//! Galactic coordinates.

use serde::Deserialize;

/// A position in the galaxy, in the 3-D coordinate frame used by EDSM
/// (light years, origin at Sol).
///
/// Deserializes directly from the `coords` object of an EDSM system record.
///
/// # Examples
///
/// ```
/// use sightseer::models::Coords;
///
/// let a = Coords::new(0.0, 0.0, 0.0);
/// let b = Coords::new(2.0, 3.0, 6.0);
/// assert!((a.distance_to(&b) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coords {
    /// X-coordinate in light years.
    pub x: f64,
    /// Y-coordinate in light years.
    pub y: f64,
    /// Z-coordinate in light years.
    pub z: f64,
}

impl Coords {
    /// Creates a new coordinate triple.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position, in light years.
    pub fn distance_to(&self, other: &Coords) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Coords::new(0.0, 0.0, 0.0);
        let b = Coords::new(2.0, 3.0, 6.0);
        assert!((a.distance_to(&b) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coords::new(1.0, -2.0, 3.5);
        let b = Coords::new(-4.0, 6.0, 0.25);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Coords::new(25.21875, -20.90625, 25.90625);
        assert!(a.distance_to(&a).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_edsm_shape() {
        let json = r#"{"x": 55.71875, "y": 17.59375, "z": 27.15625}"#;
        let c: Coords = serde_json::from_str(json).expect("valid coords");
        assert_eq!(c, Coords::new(55.71875, 17.59375, 27.15625));
    }
}
