pub mod length_substring;
pub mod length_to_point;
pub mod locate_point;

pub use length_substring::{substring, try_substring};
pub use length_to_point::{length_along_line, length_along_segment};
pub use locate_point::{
    locate_point, point_along_line, point_along_line_segment, point_along_segment,
    point_along_segment_by_fraction, LocatedPoint,
};
