use crate::math::segment_2d::{closest_point_on_segment, point_to_segment_dist, projection_factor};

use super::Coordinate;

/// A directed line segment `p0 → p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl LineSegment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Self { p0, p1 }
    }

    /// Planar length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p0.distance(&self.p1)
    }

    /// Unclamped fraction along the segment of the orthogonal projection of `pt`.
    #[must_use]
    pub fn projection_factor(&self, pt: &Coordinate) -> f64 {
        projection_factor(&pt.xy(), &self.p0.xy(), &self.p1.xy())
    }

    /// Point on the segment nearest to `pt`.
    ///
    /// Endpoints are returned verbatim (with their `z`) when the projection
    /// falls outside the segment.
    #[must_use]
    pub fn closest_point(&self, pt: &Coordinate) -> Coordinate {
        let factor = self.projection_factor(pt);
        if factor <= 0.0 {
            return self.p0;
        }
        if factor >= 1.0 {
            return self.p1;
        }
        let c = closest_point_on_segment(&pt.xy(), &self.p0.xy(), &self.p1.xy());
        let mut out = Coordinate::from(c);
        out.z = self.p0.lerp(&self.p1, factor).z;
        out
    }

    /// Distance from `pt` to the nearest point of the segment.
    #[must_use]
    pub fn distance(&self, pt: &Coordinate) -> f64 {
        point_to_segment_dist(&pt.xy(), &self.p0.xy(), &self.p1.xy())
    }

    /// Returns the segment with its direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}
