use crate::error::{GeometryError, Result};

use super::LineString;

/// A polygon bounded by one exterior ring and zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    ///
    /// # Errors
    ///
    /// Returns an error if any ring has fewer than four coordinates or is not
    /// closed.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Result<Self> {
        for ring in std::iter::once(&exterior).chain(&interiors) {
            validate_ring(ring)?;
        }
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// The outer boundary ring.
    #[must_use]
    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }

    /// The holes, in insertion order.
    #[must_use]
    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    /// Exterior ring followed by each interior ring.
    pub fn rings(&self) -> impl Iterator<Item = &LineString> {
        std::iter::once(&self.exterior).chain(&self.interiors)
    }
}

fn validate_ring(ring: &LineString) -> Result<()> {
    if ring.num_points() < 4 {
        return Err(GeometryError::TooFewCoordinates {
            kind: "ring",
            min: 4,
            actual: ring.num_points(),
        }
        .into());
    }
    if !ring.is_closed() {
        return Err(GeometryError::RingNotClosed.into());
    }
    Ok(())
}
