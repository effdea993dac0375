use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::{Coordinate, LineString};

use super::locate_point::point_along_segment;

/// Extracts the part of `line` between two arc lengths.
///
/// Lengths are clipped to `[0, line.length()]`. Equal lengths produce a
/// two-point line with identical points.
///
/// # Panics
///
/// Panics if `start > end` or either length is NaN; inverted ranges are not
/// supported. Use [`try_substring`] to get an error instead.
#[must_use]
pub fn substring(line: &LineString, start: f64, end: f64) -> LineString {
    assert!(
        start <= end,
        "inverted distances not currently supported: start {start} > end {end}"
    );
    substring_unchecked(line, start, end)
}

/// Fallible counterpart of [`substring`].
///
/// # Errors
///
/// Returns [`OperationError::NanLength`] if either length is NaN and
/// [`OperationError::InvertedRange`] if `start > end`.
pub fn try_substring(line: &LineString, start: f64, end: f64) -> Result<LineString> {
    if start.is_nan() || end.is_nan() {
        return Err(OperationError::NanLength.into());
    }
    if start > end {
        return Err(OperationError::InvertedRange { start, end }.into());
    }
    Ok(substring_unchecked(line, start, end))
}

fn substring_unchecked(line: &LineString, start: f64, end: f64) -> LineString {
    if end <= 0.0 {
        trace!(end, "substring collapses to line start");
        let first = line.first();
        return LineString::from_vec_unchecked(vec![first, first]);
    }
    if start >= line.length() {
        trace!(start, "substring collapses to line end");
        let last = line.last();
        return LineString::from_vec_unchecked(vec![last, last]);
    }

    compute_substring(line, start.max(0.0), end)
}

/// Expects `0 <= start < line.length()` and `start <= end`.
fn compute_substring(line: &LineString, start: f64, end: f64) -> LineString {
    let mut out = Vec::new();
    let mut seg_end_dist = 0.0;

    for seg in line.segments() {
        if end <= seg_end_dist {
            break;
        }
        let seg_start_dist = seg_end_dist;
        seg_end_dist = seg_start_dist + seg.length();

        if start > seg_end_dist {
            continue;
        }
        if start >= seg_start_dist && start < seg_end_dist {
            push_distinct(
                &mut out,
                point_along_segment(seg.p0, seg.p1, start - seg_start_dist),
            );
        }
        if end >= seg_end_dist {
            push_distinct(&mut out, seg.p1);
        }
        if end >= seg_start_dist && end < seg_end_dist {
            push_distinct(
                &mut out,
                point_along_segment(seg.p0, seg.p1, end - seg_start_dist),
            );
        }
    }

    if out.len() <= 1 {
        let only = out.first().copied().unwrap_or_else(|| line.first());
        return LineString::from_vec_unchecked(vec![only, only]);
    }
    LineString::from_vec_unchecked(out)
}

/// Appends `c` unless it repeats the previous vertex in the plane.
fn push_distinct(out: &mut Vec<Coordinate>, c: Coordinate) {
    if out.last().is_some_and(|prev| prev.equals_2d(&c)) {
        return;
    }
    out.push(c);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LinrefError;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn straight() -> LineString {
        LineString::from_coords([(0.0, 0.0), (10.0, 0.0)]).unwrap()
    }

    fn ell() -> LineString {
        LineString::from_coords([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap()
    }

    #[test]
    fn middle_of_single_segment() {
        let sub = substring(&straight(), 3.0, 7.0);
        assert_eq!(sub.coords(), &[c(3.0, 0.0), c(7.0, 0.0)]);
    }

    #[test]
    fn spans_interior_vertex() {
        let sub = substring(&ell(), 5.0, 15.0);
        assert_eq!(sub.coords(), &[c(5.0, 0.0), c(10.0, 0.0), c(10.0, 5.0)]);
    }

    #[test]
    fn starts_exactly_at_vertex() {
        let sub = substring(&ell(), 10.0, 12.0);
        assert_eq!(sub.coords(), &[c(10.0, 0.0), c(10.0, 2.0)]);
    }

    #[test]
    fn full_range_reproduces_line() {
        let line = ell();
        let sub = substring(&line, 0.0, line.length());
        assert_eq!(sub.coords(), line.coords());
    }

    #[test]
    fn end_beyond_length_is_clipped() {
        let sub = substring(&ell(), 15.0, 1_000.0);
        assert_eq!(sub.coords(), &[c(10.0, 5.0), c(10.0, 10.0)]);
    }

    #[test]
    fn negative_start_is_clamped() {
        let sub = substring(&straight(), -5.0, 4.0);
        assert_eq!(sub.coords(), &[c(0.0, 0.0), c(4.0, 0.0)]);
    }

    #[test]
    fn zero_length_inside_segment() {
        let sub = substring(&straight(), 4.0, 4.0);
        assert_eq!(sub.num_points(), 2);
        assert_eq!(sub.coords()[0], sub.coords()[1]);
        assert!((sub.coords()[0].x - 4.0).abs() < TOL);
    }

    #[test]
    fn zero_length_at_vertex() {
        let sub = substring(&ell(), 10.0, 10.0);
        assert_eq!(sub.coords(), &[c(10.0, 0.0), c(10.0, 0.0)]);
    }

    #[test]
    fn degenerate_before_start() {
        let sub = substring(&ell(), -3.0, 0.0);
        assert_eq!(sub.coords(), &[c(0.0, 0.0), c(0.0, 0.0)]);
    }

    #[test]
    fn degenerate_after_end() {
        let sub = substring(&ell(), 20.0, 30.0);
        assert_eq!(sub.coords(), &[c(10.0, 10.0), c(10.0, 10.0)]);
    }

    #[test]
    fn preserves_z_of_vertices() {
        let line = LineString::new(vec![
            Coordinate::new_3d(0.0, 0.0, 0.0),
            Coordinate::new_3d(10.0, 0.0, 10.0),
            Coordinate::new_3d(10.0, 10.0, 30.0),
        ])
        .unwrap();
        let sub = substring(&line, 5.0, 15.0);
        let zs: Vec<_> = sub.coords().iter().map(|c| c.z.unwrap()).collect();
        assert!((zs[0] - 5.0).abs() < TOL);
        assert!((zs[1] - 10.0).abs() < TOL);
        assert!((zs[2] - 20.0).abs() < TOL);
    }

    #[test]
    #[should_panic(expected = "inverted distances not currently supported")]
    fn inverted_range_panics() {
        let _ = substring(&straight(), 7.0, 3.0);
    }

    #[test]
    fn try_substring_reports_inverted_range() {
        let err = try_substring(&straight(), 7.0, 3.0).unwrap_err();
        assert!(matches!(
            err,
            LinrefError::Operation(OperationError::InvertedRange { .. })
        ));
        assert!(matches!(
            try_substring(&straight(), f64::NAN, 3.0).unwrap_err(),
            LinrefError::Operation(OperationError::NanLength)
        ));
        assert!(try_substring(&straight(), 0.0, f64::INFINITY).is_ok());
    }
}
