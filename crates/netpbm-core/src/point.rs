//! Integer pixel coordinates
//!
//! Drawing operations take and produce [`Point`]s. A point carries no
//! invariant of its own: coordinates may lie anywhere in the `i32` range,
//! including far off the canvas, and every renderer clips to the canvas.
//! Arithmetic that would leave the `i32` range saturates.

/// An integer `(x, y)` pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from wide coordinates, saturating each at the `i32`
    /// range.
    pub const fn saturating(x: i64, y: i64) -> Self {
        Self {
            x: saturate(x),
            y: saturate(y),
        }
    }

    /// Return this point shifted by `(dx, dy)`, saturating at the `i32`
    /// range.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Integer midpoint of the segment to `other`, truncated toward zero.
    #[inline]
    pub const fn midpoint(self, other: Point) -> Self {
        Self {
            x: ((self.x as i64 + other.x as i64) / 2) as i32,
            y: ((self.y as i64 + other.y as i64) / 2) as i32,
        }
    }
}

const fn saturate(v: i64) -> i32 {
    if v < i32::MIN as i64 {
        i32::MIN
    } else if v > i32::MAX as i64 {
        i32::MAX
    } else {
        v as i32
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
