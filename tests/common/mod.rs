//! Shared helpers for the integration suites: construction shorthand and
//! full structural/geometric validation of a subdivision.

// Each integration binary compiles this module independently and uses a
// different subset of it.
#![allow(dead_code)]

use std::collections::HashSet;

use quadedge_delaunay::prelude::*;

/// Inserts the given coordinates and triangulates them.
pub fn build(points: &[(i64, i64)]) -> (Subdivision, Vec<VertexKey>, ExtremeEdges) {
    let pts: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let mut sub = Subdivision::with_capacity(pts.len());
    let mut keys = sub.insert_points(&pts).expect("vertex pool sized for input");
    let ex = triangulate(&mut sub, &mut keys).expect("triangulation should succeed");
    (sub, keys, ex)
}

/// Checks the quad-edge structural invariants over every live edge and
/// vertex: twin involution, oprev/dnext inversion, finite face cycles,
/// closed vertex rotations, and incident-edge coherence.
pub fn assert_structural_invariants(sub: &Subdivision) {
    let edge_count = sub.edge_count();

    for e in sub.directed_edges() {
        assert_eq!(sub.twin(sub.twin(e)), e, "twin is not an involution");
        assert_ne!(sub.twin(e), e, "edge is its own twin");
        assert_eq!(sub.dnext(sub.oprev(e)), e, "oprev is not dnext's inverse");
        assert_eq!(sub.oprev(sub.dnext(e)), e, "dnext is not oprev's inverse");
        assert_eq!(
            sub.orig(e),
            sub.dest(sub.twin(e)),
            "twin endpoints disagree"
        );

        // Face walk must come back in a bounded number of steps.
        let mut f = sub.dnext(e);
        let mut steps = 1;
        while f != e {
            f = sub.dnext(f);
            steps += 1;
            assert!(steps <= edge_count, "face cycle does not close");
        }
    }

    for (v, vertex) in sub.vertices() {
        let Some(start) = vertex.edge else { continue };
        assert_eq!(sub.orig(start), v, "incident edge not directed out of vertex");

        let mut f = start;
        let mut steps = 0;
        loop {
            assert_eq!(sub.orig(f), v, "rotation leaves the vertex");
            f = sub.onext(f);
            steps += 1;
            assert!(steps <= edge_count, "vertex rotation does not close");
            if f == start {
                break;
            }
        }
    }
}

/// Collects each bounded face as a vertex triple.
///
/// Bounded faces are the `dnext` three-cycles whose vertex walk is
/// clockwise; the outer face walks counter-clockwise.
pub fn bounded_faces(sub: &Subdivision) -> Vec<[VertexKey; 3]> {
    let mut faces = Vec::new();
    let mut visited: HashSet<EdgeKey> = HashSet::new();

    for e in sub.directed_edges() {
        if visited.contains(&e) {
            continue;
        }
        let e2 = sub.dnext(e);
        let e3 = sub.dnext(e2);
        if sub.dnext(e3) != e {
            continue;
        }
        visited.extend([e, e2, e3]);

        let (v0, v1, v2) = (sub.orig(e), sub.orig(e2), sub.orig(e3));
        if orientation(sub.point(v0), sub.point(v1), sub.point(v2)) == Orientation::Clockwise {
            faces.push([v0, v1, v2]);
        }
    }
    faces
}

/// Asserts the empty-circle property: no vertex lies strictly inside the
/// circumcircle of any bounded face.
pub fn assert_delaunay(sub: &Subdivision) {
    for face in bounded_faces(sub) {
        let [v0, v1, v2] = face;
        // Reverse the clockwise walk to satisfy in_circle's CCW contract.
        let (a, b, c) = (sub.point(v2), sub.point(v1), sub.point(v0));
        for (v, vertex) in sub.vertices() {
            if face.contains(&v) {
                continue;
            }
            assert_ne!(
                in_circle(a, b, c, vertex.point),
                InCircle::Inside,
                "point {} violates the empty-circle property of face ({}, {}, {})",
                vertex.point,
                a,
                b,
                c
            );
        }
    }
}

/// Asserts the Euler edge-count relation for a full (non-collinear)
/// triangulation: `E = 3n - 3 - h` with `h` hull vertices.
pub fn assert_euler_count(sub: &Subdivision, keys: &[VertexKey]) {
    let n = keys.len();
    let h = keys.iter().filter(|&&v| sub.on_convex_hull(v)).count();
    assert_eq!(
        sub.edge_count() / 2,
        3 * n - 3 - h,
        "edge count violates Euler's relation (n = {n}, hull = {h})"
    );
}
