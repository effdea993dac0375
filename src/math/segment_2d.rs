use super::{Point2, TOLERANCE};

/// Returns the fraction along the segment `a → b` at which the orthogonal
/// projection of `p` falls.
///
/// The value is unclamped: `< 0` lies before `a`, `> 1` lies past `b`.
/// A degenerate (zero-length) segment yields `0.0`.
#[must_use]
pub fn projection_factor(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    if p == a {
        return 0.0;
    }
    if p == b {
        return 1.0;
    }

    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return 0.0;
    }

    (p - a).dot(&d) / len_sq
}

/// Returns the point on the segment `a → b` nearest to `p`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let t = projection_factor(p, a, b);
    if t <= 0.0 {
        return *a;
    }
    if t >= 1.0 {
        return *b;
    }
    a + (b - a) * t
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}
