//! # quadedge-delaunay
//!
//! Delaunay triangulation of a planar integer point set by divide and
//! conquer, operating directly on a quad-edge subdivision, with support for
//! incremental point deletion and local re-triangulation of the hole.
//!
//! # Overview
//!
//! The building blocks, from the bottom up:
//!
//! - [`geometry`] — points and the exact integer predicates (orientation,
//!   in-circle, axis comparators) that drive every topological decision.
//! - [`core::pool`] — fixed-capacity generational pools backing all vertex
//!   and edge storage.
//! - [`core::subdivision`] — the quad-edge topology engine: edges stored as
//!   twin pairs of directed quarter-edges with `oprev`/`dnext` rotation
//!   links, mutated only through invariant-preserving splices.
//! - [`core::algorithms::divide_conquer`] — the recursive triangulator,
//!   alternating x- and y-median splits and merging sub-hulls along common
//!   tangents.
//! - [`core::algorithms::deletion`] — vertex removal plus greedy
//!   empty-polygon re-triangulation.
//! - [`io`] — the two-section point-file format and the edge-list dump.
//!
//! # Basic Usage
//!
//! ```rust
//! use quadedge_delaunay::prelude::*;
//!
//! let points = [
//!     Point::new(0, 0),
//!     Point::new(4, 0),
//!     Point::new(0, 4),
//!     Point::new(4, 4),
//!     Point::new(2, 2),
//! ];
//!
//! let mut sub = Subdivision::with_capacity(points.len());
//! let mut keys = sub.insert_points(&points).unwrap();
//! let center = keys[4];
//! // The key slice is reordered in place by the median splits.
//! let extremes = triangulate(&mut sub, &mut keys).unwrap();
//!
//! // The subdivision is reachable from any edge; the extreme edges bound
//! // the convex hull in each cardinal direction.
//! assert_eq!(sub.origin_point(extremes.left_ccw).x, 0);
//! assert_eq!(sub.vertex_count(), 5);
//! assert_eq!(sub.edge_count() / 2, 8); // 4 hull edges + 4 spokes
//!
//! // Deleting the interior point re-triangulates the square it leaves.
//! delete_and_triangulate(&mut sub, center).unwrap();
//! assert_eq!(sub.edge_count() / 2, 5);
//! ```
//!
//! # Invariants
//!
//! Every mutating topology operation preserves:
//!
//! - **Twin involution** — `twin(twin(e)) == e` for every live edge; edges
//!   are created and destroyed strictly in twin pairs.
//! - **Rotation closure** — `oprev` and `dnext` are mutual inverses, and
//!   repeated `twin → dnext` around any vertex is a finite closed cycle.
//! - **Incident-edge coherence** — a vertex's incident-edge reference always
//!   names an edge directed out of it, and is `None` exactly when the vertex
//!   is isolated.
//!
//! After [`triangulate`](core::algorithms::divide_conquer::triangulate) the
//! subdivision additionally satisfies the empty-circle property: no input
//! point lies strictly inside the circumcircle of any bounded face.
//!
//! # Numerical range
//!
//! Predicates use `i128` intermediates over `i64` coordinates. Orientation
//! is exact for all inputs; the in-circle determinant is exact for
//! coordinates with `|x|, |y| < 2^29`. Inputs outside that range can flip a
//! predicate sign and corrupt the triangulation.
//!
//! # Resource model
//!
//! Everything is single-threaded and synchronous. Pools are sized up front
//! (`6n` directed edge slots for `n` points) and exhaustion is a typed error
//! rather than a reallocation: for a legal input it indicates a sizing
//! defect, and callers are expected to treat it as fatal.

#![forbid(unsafe_code)]

/// Core data structures and algorithms: pools, the quad-edge subdivision,
/// and the triangulation/deletion algorithms on top of it.
pub mod core {
    /// Construction and maintenance algorithms over a [`subdivision::Subdivision`].
    pub mod algorithms {
        pub mod deletion;
        pub mod divide_conquer;
        pub use deletion::*;
        pub use divide_conquer::*;
    }
    pub mod pool;
    pub mod subdivision;
    pub mod util;
    pub mod vertex;
    pub use pool::*;
    pub use subdivision::*;
    pub use vertex::*;
}

/// Geometric types and predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;
    pub use point::*;
    pub use predicates::*;
}

pub mod io;

/// Re-exports of the commonly used surface.
pub mod prelude {
    pub use crate::core::algorithms::deletion::{delete_and_triangulate, retriangulate_polygon};
    pub use crate::core::algorithms::divide_conquer::{
        triangulate, ExtremeEdges, TriangulationError,
    };
    pub use crate::core::pool::{Pool, PoolExhaustedError};
    pub use crate::core::subdivision::{EdgeKey, QuarterEdge, Subdivision, VertexKey};
    pub use crate::core::vertex::Vertex;
    pub use crate::geometry::point::Point;
    pub use crate::geometry::predicates::{
        cmp_xy, cmp_yx, in_circle, orientation, orientation_value, InCircle, Orientation,
    };
    pub use crate::io::{index_map, read_points, write_edges, EdgeOutput, InputError};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
        true
    }

    #[test]
    fn public_types_are_normal() {
        assert!(is_normal::<Point>());
        assert!(is_normal::<Subdivision>());
        assert!(is_normal::<QuarterEdge>());
        assert!(is_normal::<Vertex>());
        assert!(is_normal::<ExtremeEdges>());
        assert!(is_normal::<TriangulationError>());
    }
}
