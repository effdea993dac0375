use thiserror::Error;

/// Top-level error type for the linear referencing kernel.
#[derive(Debug, Error)]
pub enum LinrefError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building geometries.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{kind} requires at least {min} coordinates, got {actual}")]
    TooFewCoordinates {
        kind: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("ring is not closed")]
    RingNotClosed,
}

/// Errors raised by linear referencing and distance operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("inverted distances not currently supported: start {start} > end {end}")]
    InvertedRange { start: f64, end: f64 },

    #[error("length is NaN")]
    NanLength,

    #[error("geometry has no vertices")]
    EmptyGeometry,
}

/// Convenience type alias for results using [`LinrefError`].
pub type Result<T> = std::result::Result<T, LinrefError>;
