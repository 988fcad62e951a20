//! Geometric predicates for planar Delaunay triangulation.
//!
//! This module contains the orientation and in-circle tests that drive every
//! topological rewrite in the triangulator, plus the two lexicographic
//! comparators used for median selection and hull walks.
//!
//! All intermediate arithmetic is widened to `i128`. For `orientation` the
//! products fit for any `i64` input; for `in_circle` the determinant involves
//! fourth powers of coordinate differences, so results are exact whenever
//! `|x|, |y| < 2^29` for every input point. Points outside that range may
//! wrap and silently flip a predicate sign.

use crate::geometry::point::Point;

/// The orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The triple turns counter-clockwise (positive signed area).
    CounterClockwise,
    /// The triple turns clockwise (negative signed area).
    Clockwise,
    /// The three points are collinear.
    Degenerate,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CounterClockwise => write!(f, "counter-clockwise"),
            Self::Clockwise => write!(f, "clockwise"),
            Self::Degenerate => write!(f, "degenerate"),
        }
    }
}

/// The position of a query point relative to a circle through three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InCircle {
    /// The query point lies strictly inside the circle.
    Inside,
    /// The query point lies exactly on the circle.
    Boundary,
    /// The query point lies strictly outside the circle.
    Outside,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inside => write!(f, "inside"),
            Self::Boundary => write!(f, "boundary"),
            Self::Outside => write!(f, "outside"),
        }
    }
}

/// Returns twice the signed area of the triangle `(a, b, c)`.
///
/// Positive for a counter-clockwise triple, negative for clockwise, zero for
/// collinear points. Exposed alongside [`orientation`] for callers that need
/// the raw magnitude.
#[must_use]
pub fn orientation_value(a: Point, b: Point, c: Point) -> i128 {
    let d11 = i128::from(a.x) - i128::from(c.x);
    let d21 = i128::from(b.x) - i128::from(c.x);
    let d12 = i128::from(a.y) - i128::from(c.y);
    let d22 = i128::from(b.y) - i128::from(c.y);

    d11 * d22 - d12 * d21
}

/// Classifies the turn direction of the ordered triple `(a, b, c)`.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::{orientation, Orientation};
///
/// let a = Point::new(0, 0);
/// let b = Point::new(1, 0);
/// let c = Point::new(0, 1);
/// assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, c, b), Orientation::Clockwise);
/// ```
#[must_use]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    match orientation_value(a, b, c).signum() {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => Orientation::Degenerate,
    }
}

/// Tests whether `d` lies inside the circle through `a`, `b`, `c`.
///
/// `a`, `b`, `c` must be in counter-clockwise order; with a clockwise triple
/// the inside/outside classification is inverted. Computed as the sign of the
/// 3×3 determinant of coordinate differences from `d` and their squared
/// distances. Exact for coordinates with `|x|, |y| < 2^29`.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::{in_circle, InCircle};
///
/// let a = Point::new(0, 0);
/// let b = Point::new(4, 0);
/// let c = Point::new(0, 4);
/// // Circle through a, b, c has center (2, 2) and radius sqrt(8).
/// assert_eq!(in_circle(a, b, c, Point::new(2, 2)), InCircle::Inside);
/// assert_eq!(in_circle(a, b, c, Point::new(4, 4)), InCircle::Boundary);
/// assert_eq!(in_circle(a, b, c, Point::new(5, 5)), InCircle::Outside);
/// ```
#[must_use]
pub fn in_circle(a: Point, b: Point, c: Point, d: Point) -> InCircle {
    let d11 = i128::from(a.x) - i128::from(d.x);
    let d12 = i128::from(a.y) - i128::from(d.y);
    let d13 = d11 * d11 + d12 * d12;
    let d21 = i128::from(b.x) - i128::from(d.x);
    let d22 = i128::from(b.y) - i128::from(d.y);
    let d23 = d21 * d21 + d22 * d22;
    let d31 = i128::from(c.x) - i128::from(d.x);
    let d32 = i128::from(c.y) - i128::from(d.y);
    let d33 = d31 * d31 + d32 * d32;

    let det =
        d11 * (d22 * d33 - d32 * d23) - d12 * (d21 * d33 - d31 * d23) + d13 * (d21 * d32 - d31 * d22);

    match det.signum() {
        1 => InCircle::Inside,
        -1 => InCircle::Outside,
        _ => InCircle::Boundary,
    }
}

/// Strict less-than, lexicographic by `(x, y)`.
#[must_use]
pub fn cmp_xy(a: Point, b: Point) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Strict less-than by `y`, ties broken by `x` **descending**.
///
/// On equal `y` the rightward point is considered lower. This asymmetry with
/// [`cmp_xy`] is deliberate: the vertical merge's tangent search depends on
/// it to resolve ties consistently with the hull walk direction.
#[must_use]
pub fn cmp_yx(a: Point, b: Point) -> bool {
    a.y < b.y || (a.y == b.y && a.x > b.x)
}
