use crate::error::{OperationError, Result};
use crate::geometry::{Coordinate, Geometry, LineSegment, LineString, Polygon};

use super::PointPairDistance;

/// Folds the nearest point of `geom` to `pt` into `acc`.
///
/// Stored pairs are ordered (point on `geom`, `pt`). Polygons contribute their
/// rings only, so a query point inside a polygon still measures to the
/// boundary.
pub fn compute_distance(geom: &Geometry, pt: &Coordinate, acc: &mut PointPairDistance) {
    match geom {
        Geometry::Point(c) => acc.set_minimum(*c, *pt),
        Geometry::LineString(line) => distance_to_line_string(line, pt, acc),
        Geometry::Polygon(poly) => distance_to_polygon(poly, pt, acc),
        Geometry::Collection(members) => {
            for member in members {
                compute_distance(member, pt, acc);
            }
        }
    }
}

/// Folds the nearest point of each segment of `line` into `acc`.
pub fn distance_to_line_string(line: &LineString, pt: &Coordinate, acc: &mut PointPairDistance) {
    for seg in line.segments() {
        distance_to_segment(&seg, pt, acc);
    }
}

/// Folds the nearest point of `seg` to `pt` into `acc`.
pub fn distance_to_segment(seg: &LineSegment, pt: &Coordinate, acc: &mut PointPairDistance) {
    acc.set_minimum(seg.closest_point(pt), *pt);
}

/// Folds the nearest point of every ring of `poly` into `acc`.
pub fn distance_to_polygon(poly: &Polygon, pt: &Coordinate, acc: &mut PointPairDistance) {
    for ring in poly.rings() {
        distance_to_line_string(ring, pt, acc);
    }
}

/// Minimum distance from `pt` to `geom` in a fresh accumulator.
///
/// The result stays uninitialized when `geom` has no vertices.
#[must_use]
pub fn distance(geom: &Geometry, pt: &Coordinate) -> PointPairDistance {
    let mut acc = PointPairDistance::new();
    compute_distance(geom, pt, &mut acc);
    acc
}

/// Like [`distance`], but reports a geometry without vertices as an error.
///
/// # Errors
///
/// Returns [`OperationError::EmptyGeometry`] if `geom` holds no vertices.
pub fn try_distance(geom: &Geometry, pt: &Coordinate) -> Result<PointPairDistance> {
    let acc = distance(geom, pt);
    if acc.is_initialized() {
        Ok(acc)
    } else {
        Err(OperationError::EmptyGeometry.into())
    }
}
