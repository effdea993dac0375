use crate::geometry::Coordinate;

/// A pair of points and the planar distance separating them.
///
/// Starts out uninitialized (distance reported as `+∞`) and is refined by
/// the running-extremum setters. Every distance-producing operation in this
/// crate threads one of these through its scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPairDistance {
    pair: Option<[Coordinate; 2]>,
    distance: f64,
}

impl Default for PointPairDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl PointPairDistance {
    /// Creates an uninitialized accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pair: None,
            distance: f64::INFINITY,
        }
    }

    /// Creates an accumulator holding `a` and `b`.
    #[must_use]
    pub fn from_pair(a: Coordinate, b: Coordinate) -> Self {
        Self {
            pair: Some([a, b]),
            distance: a.distance(&b),
        }
    }

    /// Resets to the uninitialized state.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Stores `a` and `b` unconditionally.
    pub fn initialize_pair(&mut self, a: Coordinate, b: Coordinate) {
        *self = Self::from_pair(a, b);
    }

    /// Returns `true` once a pair has been stored.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.pair.is_some()
    }

    /// Distance between the stored points, `+∞` while uninitialized.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The stored pair, if any.
    #[must_use]
    pub fn coordinates(&self) -> Option<[Coordinate; 2]> {
        self.pair
    }

    /// Keeps `a`, `b` if they are closer than the current pair.
    pub fn set_minimum(&mut self, a: Coordinate, b: Coordinate) {
        let d = a.distance(&b);
        if !self.is_initialized() || d < self.distance {
            self.pair = Some([a, b]);
            self.distance = d;
        }
    }

    /// Keeps `a`, `b` if they are farther apart than the current pair.
    pub fn set_maximum(&mut self, a: Coordinate, b: Coordinate) {
        let d = a.distance(&b);
        if !self.is_initialized() || d > self.distance {
            self.pair = Some([a, b]);
            self.distance = d;
        }
    }

    /// [`set_minimum`](Self::set_minimum) with another accumulator's pair.
    /// An uninitialized `other` leaves `self` unchanged.
    pub fn set_minimum_from(&mut self, other: &PointPairDistance) {
        if let Some([a, b]) = other.pair {
            self.set_minimum(a, b);
        }
    }

    /// [`set_maximum`](Self::set_maximum) with another accumulator's pair.
    /// An uninitialized `other` leaves `self` unchanged.
    pub fn set_maximum_from(&mut self, other: &PointPairDistance) {
        if let Some([a, b]) = other.pair {
            self.set_maximum(a, b);
        }
    }

    /// By-value form of [`set_minimum`](Self::set_minimum).
    #[must_use]
    pub fn with_minimum(mut self, a: Coordinate, b: Coordinate) -> Self {
        self.set_minimum(a, b);
        self
    }

    /// By-value form of [`set_maximum`](Self::set_maximum).
    #[must_use]
    pub fn with_maximum(mut self, a: Coordinate, b: Coordinate) -> Self {
        self.set_maximum(a, b);
        self
    }
}
