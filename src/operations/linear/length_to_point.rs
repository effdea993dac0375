use crate::geometry::{Coordinate, LineSegment, LineString};

/// Arc length along `line` to the point of `line` nearest `pt`.
///
/// When several segments are equally near, the earliest one wins.
#[must_use]
pub fn length_along_line(line: &LineString, pt: &Coordinate) -> f64 {
    let mut min_distance = f64::INFINITY;
    let mut location = 0.0;
    let mut base = 0.0;

    for seg in line.segments() {
        let dist = seg.distance(pt);
        if dist < min_distance {
            min_distance = dist;
            location = base + length_along_segment(&seg, pt);
        }
        base += seg.length();
    }

    location
}

/// Arc length along `seg` to its point nearest `pt`, clamped to `[0, len]`.
#[must_use]
pub fn length_along_segment(seg: &LineSegment, pt: &Coordinate) -> f64 {
    let factor = seg.projection_factor(pt);
    if factor <= 0.0 {
        0.0
    } else if factor <= 1.0 {
        factor * seg.length()
    } else {
        seg.length()
    }
}
