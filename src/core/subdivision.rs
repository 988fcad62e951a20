//! Quad-edge planar subdivision.
//!
//! The subdivision stores every undirected edge as a pair of directed
//! *quarter-edges* that are twins of one another. Each quarter-edge knows its
//! origin vertex and two rotation links:
//!
//! - `dnext` — the next edge clockwise along the face boundary, starting at
//!   this edge's destination;
//! - `oprev` — the inverse link: `f.dnext == e` exactly when `e.oprev == f`.
//!
//! Composing `twin` then `dnext` steps to the next edge out of the same
//! origin, so repeated `twin → dnext` enumerates the closed clockwise
//! rotation around any vertex. By convention positive rotation about a point
//! is counter-clockwise, so a face boundary walked by `dnext` runs clockwise
//! for bounded faces and counter-clockwise around the outer hull.
//!
//! All mutating operations (`make_edge`, `destroy_edge`, `weld`, `bridge`)
//! preserve these invariants: `twin(twin(e)) == e` always, every rotation is
//! a finite cycle, and edges are created and destroyed strictly in twin
//! pairs.

use slotmap::{new_key_type, Key};

use crate::core::pool::{Pool, PoolExhaustedError};
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::predicates::{cmp_xy, orientation, Orientation};

new_key_type! {
    /// Generational key for a vertex record in the subdivision.
    pub struct VertexKey;
}

new_key_type! {
    /// Generational key for a directed quarter-edge record.
    pub struct EdgeKey;
}

/// One directed half of an undirected edge.
#[derive(Clone, Copy, Debug)]
pub struct QuarterEdge {
    /// Vertex this edge is directed out of.
    pub orig: VertexKey,
    /// Edge directed into `orig` whose `dnext` is this edge.
    pub oprev: EdgeKey,
    /// Next edge clockwise along the face boundary, from this edge's
    /// destination.
    pub dnext: EdgeKey,
    /// The same undirected edge, directed the other way.
    pub twin: EdgeKey,
}

/// A planar subdivision built from pooled vertices and quarter-edges.
///
/// The subdivision exclusively owns all vertex and edge storage; everything
/// else holds [`VertexKey`]/[`EdgeKey`] handles into it. There is no single
/// "triangulation object" beyond this: the triangulated graph is reachable
/// structurally from any one of its edges.
#[derive(Clone, Debug)]
pub struct Subdivision {
    vertices: Pool<VertexKey, Vertex>,
    edges: Pool<EdgeKey, QuarterEdge>,
}

impl Subdivision {
    /// Creates a subdivision sized for `num_points` vertices.
    ///
    /// A planar triangulation on `n` points has fewer than `3n` undirected
    /// edges, so the edge pool holds `6n` directed halves and cannot run out
    /// for a legal input.
    #[must_use]
    pub fn with_capacity(num_points: usize) -> Self {
        Self {
            vertices: Pool::with_capacity(num_points),
            edges: Pool::with_capacity(6 * num_points),
        }
    }

    /// Inserts an isolated vertex at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the vertex pool is full.
    pub fn insert_point(&mut self, point: Point) -> Result<VertexKey, PoolExhaustedError> {
        self.vertices.acquire(Vertex::new(point))
    }

    /// Inserts a batch of points, returning their keys in order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the vertex pool fills up.
    pub fn insert_points(&mut self, points: &[Point]) -> Result<Vec<VertexKey>, PoolExhaustedError> {
        points.iter().map(|&p| self.insert_point(p)).collect()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The vertex record behind `v`.
    #[must_use]
    pub fn vertex(&self, v: VertexKey) -> &Vertex {
        &self.vertices[v]
    }

    /// Location of vertex `v`.
    #[must_use]
    pub fn point(&self, v: VertexKey) -> Point {
        self.vertices[v].point
    }

    /// Origin vertex of `e`.
    #[must_use]
    pub fn orig(&self, e: EdgeKey) -> VertexKey {
        self.edges[e].orig
    }

    /// Destination vertex of `e` (the origin of its twin).
    #[must_use]
    pub fn dest(&self, e: EdgeKey) -> VertexKey {
        self.edges[self.edges[e].twin].orig
    }

    /// The oppositely directed half of the same undirected edge.
    #[must_use]
    pub fn twin(&self, e: EdgeKey) -> EdgeKey {
        self.edges[e].twin
    }

    /// The edge directed into `e`'s origin that precedes `e` on their shared
    /// face boundary.
    #[must_use]
    pub fn oprev(&self, e: EdgeKey) -> EdgeKey {
        self.edges[e].oprev
    }

    /// Next edge clockwise along the face boundary from `e`'s destination.
    #[must_use]
    pub fn dnext(&self, e: EdgeKey) -> EdgeKey {
        self.edges[e].dnext
    }

    /// Next edge out of `e`'s origin in the clockwise rotation.
    #[must_use]
    pub fn onext(&self, e: EdgeKey) -> EdgeKey {
        self.dnext(self.twin(e))
    }

    /// Location of `e`'s origin.
    #[must_use]
    pub fn origin_point(&self, e: EdgeKey) -> Point {
        self.point(self.orig(e))
    }

    /// Location of `e`'s destination.
    #[must_use]
    pub fn dest_point(&self, e: EdgeKey) -> Point {
        self.point(self.dest(e))
    }

    /// Whether `e` refers to a live quarter-edge.
    #[must_use]
    pub fn contains_edge(&self, e: EdgeKey) -> bool {
        self.edges.contains(e)
    }

    /// Whether `v` refers to a live vertex.
    #[must_use]
    pub fn contains_vertex(&self, v: VertexKey) -> bool {
        self.vertices.contains(v)
    }

    /// Number of live vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live directed quarter-edges (twice the undirected count).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over `(key, &vertex)` pairs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex)> {
        self.vertices.iter()
    }

    /// Iterates over all live directed edge keys.
    pub fn directed_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys()
    }

    /// Iterates over each undirected edge exactly once.
    ///
    /// The representative half is the one whose origin is the
    /// lexicographically smaller endpoint under [`cmp_xy`]; with unique
    /// points exactly one half of every pair qualifies.
    pub fn undirected_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges
            .iter()
            .filter(|&(e, _)| cmp_xy(self.origin_point(e), self.dest_point(e)))
            .map(|(e, _)| e)
    }

    // =========================================================================
    // TOPOLOGY OPERATIONS
    // =========================================================================

    /// Creates a disconnected edge pair running `orig → dest` and back.
    ///
    /// Both halves start self-looped through each other on `oprev`/`dnext`
    /// (the two-edge cycle that is an isolated edge's face boundary). If
    /// either endpoint had no incident edge, its reference is set to the new
    /// half directed out of it. Returns the `orig → dest` half.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the edge pool cannot supply a pair.
    pub fn make_edge(
        &mut self,
        orig: VertexKey,
        dest: VertexKey,
    ) -> Result<EdgeKey, PoolExhaustedError> {
        let e = self.edges.acquire(QuarterEdge {
            orig,
            oprev: EdgeKey::null(),
            dnext: EdgeKey::null(),
            twin: EdgeKey::null(),
        })?;
        let t = match self.edges.acquire(QuarterEdge {
            orig: dest,
            oprev: e,
            dnext: e,
            twin: e,
        }) {
            Ok(t) => t,
            Err(err) => {
                // Keep the pair discipline: never leave a lone half behind.
                self.edges.release(e);
                return Err(err);
            }
        };

        let half = &mut self.edges[e];
        half.oprev = t;
        half.dnext = t;
        half.twin = t;

        if self.vertices[orig].edge.is_none() {
            self.vertices[orig].edge = Some(e);
        }
        if self.vertices[dest].edge.is_none() {
            self.vertices[dest].edge = Some(t);
        }

        Ok(e)
    }

    /// Splices `e` and its twin out of both endpoint rotations and releases
    /// the pair.
    ///
    /// Endpoint incident-edge references are repaired first: if an endpoint
    /// referenced one of the removed halves it is repointed at another edge
    /// still incident to it, or cleared to `None` when this was the last one.
    pub fn destroy_edge(&mut self, e: EdgeKey) {
        let t = self.twin(e);
        let orig = self.orig(e);
        let dest = self.orig(t);

        let e_oprev = self.oprev(e);
        let e_dnext = self.dnext(e);
        let t_oprev = self.oprev(t);
        let t_dnext = self.dnext(t);

        if self.vertices[orig].edge == Some(e) {
            self.vertices[orig].edge = if t_dnext == e { None } else { Some(t_dnext) };
        }
        if self.vertices[dest].edge == Some(t) {
            self.vertices[dest].edge = if e_dnext == t { None } else { Some(e_dnext) };
        }

        self.edges[e_oprev].dnext = t_dnext;
        self.edges[e_dnext].oprev = t_oprev;
        self.edges[t_oprev].dnext = e_dnext;
        self.edges[t_dnext].oprev = e_oprev;

        self.edges.release(e);
        self.edges.release(t);
    }

    /// Splices `in_` immediately before `out` in their shared vertex's
    /// clockwise rotation.
    ///
    /// `in_` must be directed into the vertex that `out` is directed out of;
    /// `in_` is assumed not yet attached there, `out` already is. Afterwards
    /// `in_.dnext == out`, and `in_`'s twin takes over `out`'s old
    /// predecessor. The rest of the rotation is untouched.
    pub fn weld(&mut self, in_: EdgeKey, out: EdgeKey) {
        debug_assert_eq!(self.dest(in_), self.orig(out));

        let prev = self.oprev(out);
        let in_twin = self.twin(in_);

        self.edges[out].oprev = in_;
        self.edges[in_].dnext = out;
        self.edges[in_twin].oprev = prev;
        self.edges[prev].dnext = in_twin;
    }

    /// Connects `in_`'s destination to `out`'s origin with a new edge so
    /// that `in_ → new → out` forms a clockwise face boundary.
    ///
    /// Precondition: `in_` and `out` already lie on a common face boundary in
    /// that clockwise order. Violating this silently corrupts the rotation
    /// invariant; it cannot be checked locally.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the edge pool cannot supply a pair.
    pub fn bridge(&mut self, in_: EdgeKey, out: EdgeKey) -> Result<EdgeKey, PoolExhaustedError> {
        let orig = self.dest(in_);
        let dest = self.orig(out);

        let e = self.make_edge(orig, dest)?;
        let et = self.twin(e);

        let after_in = self.dnext(in_);
        self.weld(et, after_in);
        self.weld(e, out);

        Ok(e)
    }

    /// Destroys every edge incident to `v`, then releases the vertex.
    ///
    /// A vertex with incident edges is never released directly; this is the
    /// only path that retires a connected vertex.
    pub fn remove_vertex(&mut self, v: VertexKey) {
        while let Some(e) = self.vertices[v].edge {
            self.destroy_edge(e);
        }
        self.vertices.release(v);
    }

    /// Whether `v` lies on the outer boundary of the triangulation.
    ///
    /// Walks the incident faces of `v`; a face triple with non-positive
    /// orientation is a degenerate or reflex wedge, which only occurs along
    /// the hull. Assumes `v` belongs to a full triangulation.
    #[must_use]
    pub fn on_convex_hull(&self, v: VertexKey) -> bool {
        let Some(e) = self.vertices[v].edge else {
            return false;
        };

        let mut f = e;
        loop {
            let a = self.dest_point(f);
            let b = self.dest_point(self.onext(f));
            let c = self.origin_point(f);
            if orientation(a, b, c) != Orientation::CounterClockwise {
                return true;
            }
            f = self.onext(f);
            if f == e {
                return false;
            }
        }
    }

    /// Collects the face boundary cycle starting at `e`, following `dnext`.
    #[must_use]
    pub fn face_cycle(&self, e: EdgeKey) -> Vec<EdgeKey> {
        let mut cycle = vec![e];
        let mut f = self.dnext(e);
        while f != e {
            cycle.push(f);
            f = self.dnext(f);
        }
        cycle
    }
}
