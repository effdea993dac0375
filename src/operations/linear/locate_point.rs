use tracing::trace;

use crate::geometry::{Coordinate, LineSegment, LineString};

/// A point located along a line string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedPoint {
    /// The point at the requested arc length.
    pub coordinate: Coordinate,
    /// Index of the segment containing the point, or the line's coordinate
    /// count when the requested length reaches or passes the end.
    pub segment_index: usize,
}

impl LocatedPoint {
    /// Returns `true` if the requested length was at or beyond the line end.
    #[must_use]
    pub fn is_past_end(&self, line: &LineString) -> bool {
        self.segment_index >= line.num_points()
    }
}

/// Locates the point `length` along `line`.
///
/// Lengths at or beyond the total length resolve to the last coordinate.
/// Negative lengths resolve to the first coordinate of the first segment.
#[must_use]
pub fn locate_point(line: &LineString, length: f64) -> LocatedPoint {
    let mut total = 0.0;
    for (i, seg) in line.segments().enumerate() {
        let seg_len = seg.length();
        if total + seg_len > length {
            return LocatedPoint {
                coordinate: point_along_segment(seg.p0, seg.p1, length - total),
                segment_index: i,
            };
        }
        total += seg_len;
    }

    trace!(length, total, "locate past end of line");
    LocatedPoint {
        coordinate: line.last(),
        segment_index: line.num_points(),
    }
}

/// Coordinate `length` along `line`; see [`locate_point`].
#[must_use]
pub fn point_along_line(line: &LineString, length: f64) -> Coordinate {
    locate_point(line, length).coordinate
}

/// Point `length` along the segment `p0 → p1`, clamped to the endpoints.
///
/// A zero-length segment always yields `p0`.
#[must_use]
pub fn point_along_segment(p0: Coordinate, p1: Coordinate, length: f64) -> Coordinate {
    let seg_len = p0.distance(&p1);
    if seg_len <= 0.0 {
        return p0;
    }
    point_along_segment_by_fraction(p0, p1, length / seg_len)
}

/// [`point_along_segment`] for a [`LineSegment`].
#[must_use]
pub fn point_along_line_segment(seg: &LineSegment, length: f64) -> Coordinate {
    point_along_segment(seg.p0, seg.p1, length)
}

/// Point at fraction `frac` of the way from `p0` to `p1`.
///
/// `frac <= 0` returns `p0` and `frac >= 1` returns `p1` unchanged.
#[must_use]
pub fn point_along_segment_by_fraction(p0: Coordinate, p1: Coordinate, frac: f64) -> Coordinate {
    if frac <= 0.0 {
        return p0;
    }
    if frac >= 1.0 {
        return p1;
    }
    p0.lerp(&p1, frac)
}
