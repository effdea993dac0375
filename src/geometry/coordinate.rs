use crate::math::Point2;

/// A planar position with an optional elevation.
///
/// Distances are always measured in the `xy` plane; `z` rides along and is
/// interpolated only when both endpoints of a segment carry it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    /// Creates a 2D coordinate.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a coordinate carrying an elevation.
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Returns the planar position as an nalgebra point.
    #[must_use]
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Planar Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.xy() - other.xy()).norm()
    }

    /// Compares only `x` and `y`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns `true` if `x` and `y` are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation towards `other`; `frac` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Coordinate, frac: f64) -> Coordinate {
        let z = match (self.z, other.z) {
            (Some(z0), Some(z1)) => Some(z0 + (z1 - z0) * frac),
            _ => None,
        };
        Coordinate {
            x: self.x + (other.x - self.x) * frac,
            y: self.y + (other.y - self.y) * frac,
            z,
        }
    }
}

impl From<Point2> for Coordinate {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
