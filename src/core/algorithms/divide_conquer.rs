//! Divide-and-conquer Delaunay triangulation.
//!
//! The triangulator alternates split axes between recursion levels:
//! [`triangulate`] splits the point set at its x-median, hands each half to
//! the vertical variant (which splits at the y-median and recurses back),
//! and merges the two sub-triangulations along their common tangent. The
//! merge sweeps "upward" from the tangent, one cross edge at a time, deleting
//! edges that fail the in-circle test, the flip-equivalent step of this
//! algorithm family.
//!
//! Each recursive call returns an [`ExtremeEdges`] record describing the four
//! cardinal hull edges of the sub-triangulation it built; the merge consumes
//! the two records and derives the merged hull's own.

use thiserror::Error;

use crate::core::pool::PoolExhaustedError;
use crate::core::subdivision::{EdgeKey, Subdivision, VertexKey};
use crate::core::util::select_nth;
use crate::geometry::predicates::{cmp_xy, cmp_yx, in_circle, orientation, InCircle, Orientation};

/// Errors from triangulation construction.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The input slice held fewer than two points.
    #[error("cannot triangulate fewer than 2 points (got {count})")]
    TooFewPoints {
        /// Number of points that were supplied.
        count: usize,
    },
    /// A pool ran out of slots; the subdivision was sized for a smaller
    /// input.
    #[error(transparent)]
    PoolExhausted(#[from] PoolExhaustedError),
}

/// The four cardinal hull edges of a (sub-)triangulation.
///
/// Directions follow the hull walk convention: counter-clockwise edges for
/// the left/bottom extremes, clockwise for the right/top. The record is
/// transient: each merge step consumes the records of its two halves and
/// produces a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtremeEdges {
    /// Counter-clockwise hull edge at the leftmost vertex.
    pub left_ccw: EdgeKey,
    /// Clockwise hull edge at the rightmost vertex.
    pub right_cw: EdgeKey,
    /// Counter-clockwise hull edge at the bottommost vertex.
    pub bottom_ccw: EdgeKey,
    /// Clockwise hull edge at the topmost vertex.
    pub top_cw: EdgeKey,
}

/// Triangulates the given vertices, which must already be inserted in `sub`
/// and refer to unique points.
///
/// The slice is reordered in place by the median selections. Returns the
/// four extreme hull edges of the finished triangulation; the triangulation
/// itself lives in `sub`, reachable from any returned edge.
///
/// # Errors
///
/// [`TriangulationError::TooFewPoints`] for slices shorter than two, or
/// [`TriangulationError::PoolExhausted`] if `sub` was sized for fewer points.
pub fn triangulate(
    sub: &mut Subdivision,
    points: &mut [VertexKey],
) -> Result<ExtremeEdges, TriangulationError> {
    if points.len() < 2 {
        return Err(TriangulationError::TooFewPoints {
            count: points.len(),
        });
    }
    Ok(triangulate_horizontal(sub, points)?)
}

/// Two-point base case: a single edge, extreme in every direction.
fn triangulate_two(
    sub: &mut Subdivision,
    points: &[VertexKey],
) -> Result<ExtremeEdges, PoolExhaustedError> {
    let (a, b) = (points[0], points[1]);
    let e = sub.make_edge(a, b)?;
    let t = sub.twin(e);

    let (pa, pb) = (sub.point(a), sub.point(b));
    let (left_ccw, right_cw) = if cmp_xy(pa, pb) { (e, t) } else { (t, e) };
    let (bottom_ccw, top_cw) = if cmp_yx(pa, pb) { (e, t) } else { (t, e) };

    Ok(ExtremeEdges {
        left_ccw,
        right_cw,
        bottom_ccw,
        top_cw,
    })
}

/// Three-point base case: a triangle, or an open two-edge chain when the
/// points are collinear.
fn triangulate_three(
    sub: &mut Subdivision,
    points: &mut [VertexKey],
) -> Result<ExtremeEdges, PoolExhaustedError> {
    // Selecting the median of three leaves the whole triple ordered.
    select_nth(points, 1, |a, b| cmp_xy(sub.point(*a), sub.point(*b)));
    let (a, b, c) = (points[0], points[1], points[2]);

    let e1 = sub.make_edge(a, b)?;
    let e2 = sub.make_edge(b, c)?;
    sub.weld(e1, e2);

    let (pa, pb, pc) = (sub.point(a), sub.point(b), sub.point(c));
    let (left_ccw, right_cw) = match orientation(pa, pb, pc) {
        Orientation::CounterClockwise => {
            sub.bridge(e2, e1)?;
            (e1, sub.twin(e2))
        }
        Orientation::Clockwise => {
            let e3 = sub.bridge(e2, e1)?;
            (sub.twin(e3), e3)
        }
        // Collinear: leave the chain open, no closing bridge.
        Orientation::Degenerate => (e1, sub.twin(e2)),
    };

    // Recover the vertical extremes by reordering on the y axis and reading
    // the already-built edges back out of the rotation at the new minimum.
    select_nth(points, 1, |a, b| cmp_yx(sub.point(*a), sub.point(*b)));
    let (a, b, c) = (points[0], points[1], points[2]);
    let Some(ae) = sub.vertex(a).edge else {
        unreachable!("all three vertices gained edges above")
    };
    let e1 = if sub.dest(ae) == b { ae } else { sub.onext(ae) };
    let e2 = sub.dnext(e1);
    let e3 = sub.dnext(e2);

    let (pa, pb, pc) = (sub.point(a), sub.point(b), sub.point(c));
    let (bottom_ccw, top_cw) = if orientation(pa, pb, pc) == Orientation::Clockwise {
        (sub.twin(e3), e3)
    } else {
        (e1, sub.twin(e2))
    };

    Ok(ExtremeEdges {
        left_ccw,
        right_cw,
        bottom_ccw,
        top_cw,
    })
}

/// Recursive entry splitting at the x-median.
fn triangulate_horizontal(
    sub: &mut Subdivision,
    points: &mut [VertexKey],
) -> Result<ExtremeEdges, PoolExhaustedError> {
    debug_assert!(points.len() >= 2);
    match points.len() {
        2 => return triangulate_two(sub, points),
        3 => return triangulate_three(sub, points),
        _ => {}
    }

    let median = points.len() / 2;
    select_nth(points, median, |a, b| cmp_xy(sub.point(*a), sub.point(*b)));

    let (left_half, right_half) = points.split_at_mut(median);
    let mut left_ex = triangulate_vertical(sub, left_half)?;
    let mut right_ex = triangulate_vertical(sub, right_half)?;

    // Lower common tangent: walk counter-clockwise around the left hull and
    // clockwise around the right until neither endpoint is below the
    // candidate line.
    let mut left_edge = left_ex.right_cw;
    let mut right_edge = right_ex.left_ccw;
    loop {
        if orientation(
            sub.origin_point(left_edge),
            sub.dest_point(left_edge),
            sub.origin_point(right_edge),
        ) == Orientation::CounterClockwise
        {
            left_edge = sub.twin(sub.oprev(sub.twin(left_edge)));
        } else if orientation(
            sub.origin_point(right_edge),
            sub.dest_point(right_edge),
            sub.origin_point(left_edge),
        ) == Orientation::Clockwise
        {
            right_edge = sub.dnext(right_edge);
        } else {
            break;
        }
    }
    let lct = sub.bridge(sub.oprev(right_edge), sub.dnext(sub.twin(left_edge)))?;

    // The tangent may itself attach at a hull extreme; repair the records.
    if sub.orig(left_edge) == sub.orig(left_ex.left_ccw) {
        left_ex.left_ccw = sub.twin(lct);
    }
    if sub.orig(right_edge) == sub.orig(right_ex.right_cw) {
        right_ex.right_cw = lct;
    }

    // Zip the halves together from the tangent upward; the last cross edge
    // produced is the upper common tangent.
    let mut uct = lct;
    while let Some(next) = next_cross_edge(sub, uct)? {
        uct = next;
    }

    let mut ex = ExtremeEdges {
        left_ccw: left_ex.left_ccw,
        right_cw: right_ex.right_cw,
        bottom_ccw: lct,
        top_cw: uct,
    };

    // Walk from the lower tangent along the hull until the boundary
    // direction reverses; that corner is the bottom extreme.
    let mut temp = sub.twin(lct);
    while cmp_yx(sub.origin_point(temp), sub.dest_point(temp)) {
        temp = sub.oprev(temp);
    }
    temp = sub.dnext(temp);
    while cmp_yx(sub.dest_point(temp), sub.origin_point(temp)) {
        temp = sub.dnext(temp);
    }
    ex.bottom_ccw = temp;

    // Same from the upper tangent for the top extreme.
    let mut temp = sub.twin(uct);
    while cmp_yx(sub.dest_point(temp), sub.origin_point(temp)) {
        temp = sub.twin(sub.dnext(sub.twin(temp)));
    }
    temp = sub.twin(sub.oprev(sub.twin(temp)));
    while cmp_yx(sub.origin_point(temp), sub.dest_point(temp)) {
        temp = sub.twin(sub.oprev(sub.twin(temp)));
    }
    ex.top_cw = temp;

    Ok(ex)
}

/// Recursive entry splitting at the y-median.
fn triangulate_vertical(
    sub: &mut Subdivision,
    points: &mut [VertexKey],
) -> Result<ExtremeEdges, PoolExhaustedError> {
    debug_assert!(points.len() >= 2);
    match points.len() {
        2 => return triangulate_two(sub, points),
        3 => return triangulate_three(sub, points),
        _ => {}
    }

    let median = points.len() / 2;
    select_nth(points, median, |a, b| cmp_yx(sub.point(*a), sub.point(*b)));

    let (bottom_half, top_half) = points.split_at_mut(median);
    let mut bottom_ex = triangulate_horizontal(sub, bottom_half)?;
    let mut top_ex = triangulate_horizontal(sub, top_half)?;

    // Right common tangent, by the same alternating walk as the horizontal
    // merge (the bottom hull plays the "left" role).
    let mut bottom_edge = bottom_ex.top_cw;
    let mut top_edge = top_ex.bottom_ccw;
    loop {
        if orientation(
            sub.origin_point(bottom_edge),
            sub.dest_point(bottom_edge),
            sub.origin_point(top_edge),
        ) == Orientation::CounterClockwise
        {
            bottom_edge = sub.twin(sub.oprev(sub.twin(bottom_edge)));
        } else if orientation(
            sub.origin_point(top_edge),
            sub.dest_point(top_edge),
            sub.origin_point(bottom_edge),
        ) == Orientation::Clockwise
        {
            top_edge = sub.dnext(top_edge);
        } else {
            break;
        }
    }
    let rct = sub.bridge(sub.oprev(top_edge), sub.dnext(sub.twin(bottom_edge)))?;

    if sub.orig(bottom_edge) == sub.orig(bottom_ex.bottom_ccw) {
        bottom_ex.bottom_ccw = sub.twin(rct);
    }
    if sub.orig(top_edge) == sub.orig(top_ex.top_cw) {
        top_ex.top_cw = rct;
    }

    let mut lct = rct;
    while let Some(next) = next_cross_edge(sub, lct)? {
        lct = next;
    }

    let mut ex = ExtremeEdges {
        left_ccw: rct,
        right_cw: rct,
        bottom_ccw: bottom_ex.bottom_ccw,
        top_cw: top_ex.top_cw,
    };

    let mut temp = rct;
    while cmp_xy(sub.dest_point(temp), sub.origin_point(temp)) {
        temp = sub.twin(sub.dnext(sub.twin(temp)));
    }
    temp = sub.twin(sub.oprev(sub.twin(temp)));
    while cmp_xy(sub.origin_point(temp), sub.dest_point(temp)) {
        temp = sub.twin(sub.oprev(sub.twin(temp)));
    }
    ex.right_cw = temp;

    let mut temp = lct;
    while cmp_xy(sub.origin_point(temp), sub.dest_point(temp)) {
        temp = sub.oprev(temp);
    }
    temp = sub.dnext(temp);
    while cmp_xy(sub.dest_point(temp), sub.origin_point(temp)) {
        temp = sub.dnext(temp);
    }
    ex.left_ccw = temp;

    Ok(ex)
}

/// Advances the merge zipper by one cross edge.
///
/// `base` must currently cross between the two partial triangulations. Each
/// side's candidate successor is valid only while it forms a correctly
/// oriented wedge with the base; a valid candidate is refined by deleting
/// successors that fail the in-circle test against the next candidate
/// around. The surviving left and right candidates are then played off
/// against each other with one more in-circle test, and the winner is
/// bridged into place as the next cross edge.
///
/// Returns `Ok(None)` when neither side has a valid candidate: `base` was
/// the final (upper) tangent, and the sweep terminates. This is the merge's
/// only termination condition.
fn next_cross_edge(
    sub: &mut Subdivision,
    base: EdgeKey,
) -> Result<Option<EdgeKey>, PoolExhaustedError> {
    let mut l_cand = sub.dnext(base);
    let valid_l = orientation(
        sub.origin_point(base),
        sub.origin_point(l_cand),
        sub.dest_point(l_cand),
    ) == Orientation::Clockwise;
    if valid_l {
        let mut next_cand = sub.dnext(sub.twin(l_cand));
        while in_circle(
            sub.origin_point(l_cand),
            sub.origin_point(base),
            sub.dest_point(l_cand),
            sub.dest_point(next_cand),
        ) == InCircle::Inside
        {
            sub.destroy_edge(l_cand);
            l_cand = next_cand;
            next_cand = sub.dnext(sub.twin(l_cand));
        }
    }

    let mut r_cand = sub.twin(sub.oprev(base));
    let valid_r = orientation(
        sub.dest_point(base),
        sub.origin_point(base),
        sub.dest_point(r_cand),
    ) == Orientation::CounterClockwise;
    if valid_r {
        let mut next_cand = sub.twin(sub.oprev(r_cand));
        while in_circle(
            sub.dest_point(base),
            sub.origin_point(base),
            sub.dest_point(r_cand),
            sub.dest_point(next_cand),
        ) == InCircle::Inside
        {
            sub.destroy_edge(r_cand);
            r_cand = next_cand;
            next_cand = sub.twin(sub.oprev(r_cand));
        }
    }

    if !valid_l && !valid_r {
        return Ok(None);
    }

    // Prefer the left candidate unless it is invalid or the in-circle test
    // favors the right one.
    let take_right = !valid_l
        || (valid_r
            && in_circle(
                sub.dest_point(l_cand),
                sub.origin_point(l_cand),
                sub.origin_point(r_cand),
                sub.dest_point(r_cand),
            ) == InCircle::Inside);

    let cross = if take_right {
        let r_twin = sub.twin(r_cand);
        sub.bridge(base, r_twin)?
    } else {
        sub.bridge(l_cand, base)?
    };

    Ok(Some(sub.twin(cross)))
}
