//! Hausdorff distance restricted to vertices.
//!
//! Only existing vertices are tried as the far point, so the result can
//! understate the true Hausdorff distance when the extremal point lies in
//! the middle of an edge. It is accurate for lines that run roughly parallel
//! and have comparable length, which is the line-matching case.

use tracing::debug;

use crate::geometry::{Coordinate, Geometry, LineSegment};

use super::{euclidean_to_point, PointPairDistance};

/// Vertex Hausdorff distance between two segments.
///
/// Each endpoint of one segment is measured against the nearest point of the
/// other, in both directions; the largest such pair wins.
#[must_use]
pub fn segment_hausdorff(seg0: &LineSegment, seg1: &LineSegment) -> PointPairDistance {
    let mut acc = PointPairDistance::new();
    max_segment_point_distance(seg0, seg1, &mut acc);
    max_segment_point_distance(seg1, seg0, &mut acc);
    acc
}

/// Vertex Hausdorff distance between two geometries.
///
/// The stored pair is (nearest point on the other geometry, far vertex).
/// An uninitialized result means one of the inputs has no vertices.
#[must_use]
pub fn vertex_hausdorff(g0: &Geometry, g1: &Geometry) -> PointPairDistance {
    let mut acc = PointPairDistance::new();
    max_vertex_distance(g0, g1, &mut acc);
    max_vertex_distance(g1, g0, &mut acc);
    debug!(distance = acc.distance(), "vertex hausdorff distance");
    acc
}

/// Convenience wrapper returning only the distance.
#[must_use]
pub fn vertex_hausdorff_distance(g0: &Geometry, g1: &Geometry) -> f64 {
    vertex_hausdorff(g0, g1).distance()
}

/// Endpoints of `pts_of` against their closest points on `seg`.
fn max_segment_point_distance(
    seg: &LineSegment,
    pts_of: &LineSegment,
    acc: &mut PointPairDistance,
) {
    for pt in [pts_of.p0, pts_of.p1] {
        acc.set_maximum(seg.closest_point(&pt), pt);
    }
}

/// Largest of the per-vertex minimum distances from `point_geom` to `geom`.
fn max_vertex_distance(point_geom: &Geometry, geom: &Geometry, acc: &mut PointPairDistance) {
    let mut max = PointPairDistance::new();
    let mut min = PointPairDistance::new();
    point_geom.for_each_vertex(&mut |vertex: &Coordinate| {
        min.initialize();
        euclidean_to_point::compute_distance(geom, vertex, &mut min);
        max.set_maximum_from(&min);
    });
    acc.set_maximum_from(&max);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::LineString;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Coordinate::new(x0, y0), Coordinate::new(x1, y1))
    }

    fn line(coords: &[(f64, f64)]) -> Geometry {
        Geometry::LineString(LineString::from_coords(coords.iter().copied()).unwrap())
    }

    #[test]
    fn parallel_unit_segments() {
        let h = 0.75;
        let ppd = segment_hausdorff(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, h, 1.0, h));
        assert_relative_eq!(ppd.distance(), h, epsilon = 1e-12);
    }

    #[test]
    fn segments_of_unequal_length() {
        // (0,0)-(4,0) vs (1,1)-(2,1): far endpoint (4,0) is 2.236 from (2,1).
        let ppd = segment_hausdorff(&seg(0.0, 0.0, 4.0, 0.0), &seg(1.0, 1.0, 2.0, 1.0));
        assert_relative_eq!(ppd.distance(), 5.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines() {
        let a = line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let b = line(&[(0.0, 2.0), (10.0, 2.0)]);
        assert_relative_eq!(vertex_hausdorff_distance(&a, &b), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn is_symmetric() {
        let a = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = line(&[(0.0, 1.0), (5.0, 3.0), (12.0, 1.0)]);
        assert_relative_eq!(
            vertex_hausdorff_distance(&a, &b),
            vertex_hausdorff_distance(&b, &a),
            epsilon = 1e-12
        );
        assert_relative_eq!(vertex_hausdorff_distance(&a, &b), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn reports_far_vertex_pair() {
        let a = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = Geometry::Point(Coordinate::new(0.0, 0.0));
        let ppd = vertex_hausdorff(&a, &b);
        assert_relative_eq!(ppd.distance(), 10.0, epsilon = 1e-12);
        let [near, far] = ppd.coordinates().unwrap();
        assert_eq!(near, Coordinate::new(0.0, 0.0));
        assert_eq!(far, Coordinate::new(10.0, 0.0));
    }

    #[test]
    fn mid_edge_extremum_is_not_examined() {
        // The true Hausdorff distance is 5, reached at (5, 0) in the middle
        // of `a`; only vertices are tried, and both of them lie on `b`.
        let a = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = Geometry::Collection(vec![
            Geometry::Point(Coordinate::new(0.0, 0.0)),
            Geometry::Point(Coordinate::new(10.0, 0.0)),
        ]);
        assert_relative_eq!(vertex_hausdorff_distance(&a, &b), 0.0, epsilon = 1e-12);
        assert_relative_eq!(vertex_hausdorff_distance(&b, &a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_pair_is_closest_point_then_endpoint() {
        let s0 = seg(0.0, 0.0, 10.0, 0.0);
        let s1 = seg(2.0, 1.0, 4.0, 3.0);
        let [closest, endpoint] = segment_hausdorff(&s0, &s1).coordinates().unwrap();
        // (10, 0) is the endpoint farthest from the other segment, whose
        // nearest point is its end (4, 3).
        assert_eq!(closest, Coordinate::new(4.0, 3.0));
        assert_eq!(endpoint, Coordinate::new(10.0, 0.0));
    }

    #[test]
    fn empty_input_stays_uninitialized() {
        let a = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let empty = Geometry::Collection(Vec::new());
        assert!(!vertex_hausdorff(&a, &empty).is_initialized());
    }
}
