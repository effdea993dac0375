pub mod euclidean_to_point;
mod point_pair;
pub mod vertex_hausdorff;

pub use euclidean_to_point::{compute_distance, distance, try_distance};
pub use point_pair::PointPairDistance;
pub use vertex_hausdorff::{segment_hausdorff, vertex_hausdorff, vertex_hausdorff_distance};
