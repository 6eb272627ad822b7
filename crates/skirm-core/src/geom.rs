//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point, doubling as a grid cell identity.
///
/// Structural equality and hashing are derived so a `Point` can serve as a
/// `HashMap` / `HashSet` key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the point is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }

    /// All eight surrounding cells (cardinal + diagonal, king-move adjacency).
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major order (by `y`, then `x`).
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The square region [0, size) × [0, size).
    #[inline]
    pub fn square(size: i32) -> Self {
        Self::new(0, 0, size, size)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the range contains no points.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` lies within the range on both axes.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3, 4);
        assert_eq!(p + Point::new(1, -2), Point::new(4, 2));
        assert_eq!(p - Point::new(3, 4), Point::ZERO);
        assert_eq!(p.shift(-1, 1), Point::new(2, 5));
    }

    #[test]
    fn point_is_usable_as_map_key() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        set.insert(Point::new(1, 2));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn point_row_major_order() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_8_surround_the_cell() {
        let p = Point::new(5, 5);
        let ns = p.neighbors_8();
        assert_eq!(ns.len(), 8);
        for n in ns {
            let d = n - p;
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
            assert_ne!(n, p);
        }
    }

    #[test]
    fn range_is_half_open() {
        let r = Range::square(100);
        assert!(Point::ZERO.in_range(&r));
        assert!(r.contains(Point::new(99, 99)));
        assert!(!r.contains(Point::new(100, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 100);
    }

    #[test]
    fn range_canonicalizes_corners() {
        let r = Range::new(5, 5, 0, 0);
        assert_eq!(r, Range::new(0, 0, 5, 5));
        assert!(!r.is_empty());
        assert!(Range::new(3, 3, 3, 7).is_empty());
    }
}
