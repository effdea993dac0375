pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{LinrefError, Result};
pub use geometry::{Coordinate, Geometry, LineSegment, LineString, Polygon};
pub use operations::distance::PointPairDistance;
