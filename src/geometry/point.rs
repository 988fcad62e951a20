//! Planar points with signed integer coordinates.
//!
//! Coordinates are plain `i64` values. All geometric predicates in
//! [`crate::geometry::predicates`] widen their intermediate arithmetic to
//! `i128`, so any point with `|x|, |y| < 2^29` is handled exactly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane with signed integer coordinates.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
///
/// let p = Point::new(3, -7);
/// assert_eq!(p.x, 3);
/// assert_eq!(p.y, -7);
/// assert_eq!(p.to_string(), "3 -7");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Creates a new point from its coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
