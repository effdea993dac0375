use crate::error::{GeometryError, Result};

use super::{Coordinate, LineSegment};

/// An ordered sequence of at least two coordinates.
///
/// Consecutive coordinates may coincide; such zero-length segments contribute
/// nothing to the arc length.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coordinate>,
}

impl LineString {
    /// Builds a line string from its vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two coordinates are given or any
    /// coordinate has a non-finite `x` or `y`.
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        if coords.len() < 2 {
            return Err(GeometryError::TooFewCoordinates {
                kind: "line string",
                min: 2,
                actual: coords.len(),
            }
            .into());
        }
        if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { coords })
    }

    /// Builds a line string from anything convertible to coordinates.
    ///
    /// # Errors
    ///
    /// See [`LineString::new`].
    pub fn from_coords<C, I>(coords: I) -> Result<Self>
    where
        C: Into<Coordinate>,
        I: IntoIterator<Item = C>,
    {
        Self::new(coords.into_iter().map(Into::into).collect())
    }

    /// Wraps coordinates produced by an operation over a validated line.
    pub(crate) fn from_vec_unchecked(coords: Vec<Coordinate>) -> Self {
        debug_assert!(coords.len() >= 2);
        Self { coords }
    }

    /// The vertices in order.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of vertices, always at least two.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// The starting vertex.
    #[must_use]
    pub fn first(&self) -> Coordinate {
        self.coords[0]
    }

    /// The final vertex.
    #[must_use]
    pub fn last(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }

    /// Returns `true` if the first and last coordinates coincide in the plane.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.first().equals_2d(&self.last())
    }

    /// Iterates over consecutive coordinate pairs.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.coords
            .windows(2)
            .map(|w| LineSegment::new(w[0], w[1]))
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Consumes the line, returning its vertices.
    #[must_use]
    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}
