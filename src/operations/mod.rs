pub mod distance;
pub mod linear;
