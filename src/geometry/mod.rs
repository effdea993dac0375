pub mod coordinate;
pub mod line_string;
pub mod polygon;
pub mod segment;

pub use coordinate::Coordinate;
pub use line_string::LineString;
pub use polygon::Polygon;
pub use segment::LineSegment;

/// Closed set of geometry kinds understood by the distance operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(LineString),
    Polygon(Polygon),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Visits every stored vertex in structural order.
    ///
    /// Polygons yield the exterior ring before the holes; collections yield
    /// their members in order.
    pub fn for_each_vertex<F: FnMut(&Coordinate)>(&self, f: &mut F) {
        match self {
            Geometry::Point(c) => f(c),
            Geometry::LineString(line) => line.coords().iter().for_each(&mut *f),
            Geometry::Polygon(poly) => {
                for ring in poly.rings() {
                    ring.coords().iter().for_each(&mut *f);
                }
            }
            Geometry::Collection(members) => {
                for member in members {
                    member.for_each_vertex(f);
                }
            }
        }
    }

    /// Total number of stored vertices.
    #[must_use]
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(line) => line.num_points(),
            Geometry::Polygon(poly) => poly.rings().map(LineString::num_points).sum(),
            Geometry::Collection(members) => members.iter().map(Geometry::num_points).sum(),
        }
    }

    /// Returns `true` if the geometry holds no vertices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }
}

impl From<Coordinate> for Geometry {
    fn from(c: Coordinate) -> Self {
        Geometry::Point(c)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(poly: Polygon) -> Self {
        Geometry::Polygon(poly)
    }
}

impl From<Vec<Geometry>> for Geometry {
    fn from(members: Vec<Geometry>) -> Self {
        Geometry::Collection(members)
    }
}
