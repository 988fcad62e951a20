//! Incremental vertex deletion with local re-triangulation.
//!
//! Removing an interior vertex tears a star-shaped hole out of the
//! triangulation. The hole's clockwise boundary cycle is recovered before
//! the vertex goes away, and then re-triangulated by a greedy ear search:
//! find a boundary vertex whose ear triangle has an empty circumcircle with
//! respect to every other boundary vertex, cut it off with a bridge, and
//! recurse on the remaining sub-polygon(s). Hull and isolated vertices need
//! no repair and are simply removed.
//!
//! Only deletion is supported incrementally; inserting a new point would
//! require rebuilding the triangulation.

use crate::core::algorithms::divide_conquer::TriangulationError;
use crate::core::subdivision::{EdgeKey, Subdivision, VertexKey};
use crate::geometry::predicates::{in_circle, InCircle};

/// Deletes vertex `v` and restores the Delaunay property locally.
///
/// Isolated and hull vertices are removed outright; the triangulation
/// around a hull vertex remains valid without repair. For an interior
/// vertex, one boundary edge of the star-shaped hole is recorded, the vertex
/// and its incident edges are destroyed, and the hole is re-triangulated.
///
/// # Errors
///
/// [`TriangulationError::PoolExhausted`] if the edge pool cannot supply the
/// repair edges; re-triangulating a hole never needs more edges than the
/// deletion released, so this indicates a sizing defect.
pub fn delete_and_triangulate(
    sub: &mut Subdivision,
    v: VertexKey,
) -> Result<(), TriangulationError> {
    let Some(e) = sub.vertex(v).edge else {
        sub.remove_vertex(v);
        return Ok(());
    };
    if sub.on_convex_hull(v) {
        sub.remove_vertex(v);
        return Ok(());
    }

    // `e` runs out of `v`; its dnext lies on the hole boundary opposite `v`
    // and survives the deletion.
    let boundary = sub.dnext(e);
    sub.remove_vertex(v);

    retriangulate_polygon(sub, boundary)
}

/// Re-triangulates the empty polygon whose clockwise boundary contains
/// `boundary`.
///
/// Walks `dnext` to enumerate the cycle. A cycle of three or fewer edges is
/// already a triangle (or smaller) and needs no work. Otherwise the first
/// two boundary vertices form a fixed base edge, and each remaining vertex
/// is tried as the base's triangle apex until one passes the in-circle test
/// against every other boundary vertex; at least one such apex exists for
/// any hole a deletion can leave. Bridging the apex in splits off one or two
/// smaller polygons, which are handled recursively.
pub fn retriangulate_polygon(
    sub: &mut Subdivision,
    boundary: EdgeKey,
) -> Result<(), TriangulationError> {
    let edges = sub.face_cycle(boundary);
    let n = edges.len();
    if n <= 3 {
        return Ok(());
    }

    let base_orig = sub.dest_point(edges[0]);
    let base_dest = sub.origin_point(edges[0]);

    for i in 2..n {
        let apex = sub.origin_point(edges[i]);
        let is_delaunay = (2..n).all(|j| {
            j == i || in_circle(base_orig, base_dest, apex, sub.origin_point(edges[j])) != InCircle::Inside
        });
        if !is_delaunay {
            continue;
        }

        if i == 2 {
            let e = sub.bridge(edges[1], edges[0])?;
            let rest = sub.twin(e);
            retriangulate_polygon(sub, rest)?;
        } else if i == n - 1 {
            let e = sub.bridge(edges[0], edges[n - 1])?;
            let rest = sub.twin(e);
            retriangulate_polygon(sub, rest)?;
        } else {
            let e1 = sub.bridge(edges[i - 1], edges[1])?;
            let e2 = sub.bridge(edges[n - 1], edges[i])?;
            retriangulate_polygon(sub, e1)?;
            retriangulate_polygon(sub, e2)?;
        }
        break;
    }

    Ok(())
}
