//! Vertex records of the planar subdivision.

use crate::core::subdivision::EdgeKey;
use crate::geometry::point::Point;

/// A triangulation vertex: a point plus one incident directed edge.
///
/// The incident edge always originates at this vertex and is `None` exactly
/// while the vertex is isolated. The subdivision keeps the reference current
/// as edges touching the vertex are created and destroyed; when the last
/// incident edge goes away the reference is cleared back to `None`.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    /// Location of the vertex.
    pub point: Point,
    /// One edge directed out of this vertex, or `None` if isolated.
    pub edge: Option<EdgeKey>,
}

impl Vertex {
    /// Creates an isolated vertex at `point`.
    #[must_use]
    pub const fn new(point: Point) -> Self {
        Self { point, edge: None }
    }

    /// Whether the vertex currently has no incident edges.
    #[must_use]
    pub const fn is_isolated(&self) -> bool {
        self.edge.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_is_isolated() {
        let v = Vertex::new(Point::new(1, 2));
        assert!(v.is_isolated());
        assert_eq!(v.point, Point::new(1, 2));
    }
}
