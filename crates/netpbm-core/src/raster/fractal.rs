//! Fractal curve generators
//!
//! Recursive Koch snowflake edges and Sierpinski triangles drawn into a
//! pixmap. Recursion depth equals the requested level, capped at
//! [`MAX_FRACTAL_LEVEL`].

use super::{Pixmap, Rgb};
use crate::point::Point;
use log::warn;
use std::f64::consts::PI;

/// Highest recursion level honoured by the fractal generators.
///
/// At this level a Koch edge already has over a million segments.
pub const MAX_FRACTAL_LEVEL: u32 = 10;

fn capped_level(level: u32, what: &str) -> u32 {
    if level > MAX_FRACTAL_LEVEL {
        warn!(
            "{} level {} exceeds maximum {}, clamping",
            what, level, MAX_FRACTAL_LEVEL
        );
        MAX_FRACTAL_LEVEL
    } else {
        level
    }
}

/// Generate the segments of a Koch curve from `p1` to `p2`.
///
/// Points are computed in `i64`; an apex beyond the `i32` range saturates.
///
/// Level 0 is the segment itself. Each further level splits every segment
/// into thirds and replaces the middle third with the two sides of an
/// equilateral bump, whose apex is the first third-point rotated 60 degrees
/// about the second.
pub fn koch_segments(level: u32, p1: Point, p2: Point) -> Vec<(Point, Point)> {
    let level = capped_level(level, "koch");
    let mut segments = Vec::with_capacity(4usize.pow(level));
    koch_recurse(level, p1, p2, &mut segments);
    segments
}

fn koch_recurse(level: u32, p1: Point, p2: Point, out: &mut Vec<(Point, Point)>) {
    if level == 0 {
        out.push((p1, p2));
        return;
    }

    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let dx = p2.x as i64 - x1;
    let dy = p2.y as i64 - y1;
    let a = Point::saturating(x1 + dx / 3, y1 + dy / 3);
    let b = Point::saturating(x1 + 2 * dx / 3, y1 + 2 * dy / 3);

    let (sin, cos) = (PI / 3.0).sin_cos();
    let vx = (a.x as i64 - b.x as i64) as f64;
    let vy = (a.y as i64 - b.y as i64) as f64;
    let apex = Point::saturating(
        b.x as i64 + (vx * cos - vy * sin) as i64,
        b.y as i64 + (vx * sin + vy * cos) as i64,
    );

    koch_recurse(level - 1, p1, a, out);
    koch_recurse(level - 1, a, apex, out);
    koch_recurse(level - 1, apex, b, out);
    koch_recurse(level - 1, b, p2, out);
}

/// Generate the corner triangles of a Sierpinski triangle.
///
/// The base triangle has corners `start`, `start + (width, 0)` and
/// `start + (width / 2, width * sqrt(3) / 2)`. Each level replaces every
/// triangle with the three corner triangles formed by its edge midpoints.
pub fn sierpinski_triangles(level: u32, start: Point, width: i32) -> Vec<[Point; 3]> {
    let level = capped_level(level, "sierpinski");
    // Float-to-int casts saturate.
    let height = (width as f64 * 3f64.sqrt() / 2.0) as i32;
    let p1 = start;
    let p2 = start.offset(width, 0);
    let p3 = start.offset(width / 2, height);

    let mut triangles = Vec::with_capacity(3usize.pow(level));
    sierpinski_recurse(level, p1, p2, p3, &mut triangles);
    triangles
}

fn sierpinski_recurse(level: u32, p1: Point, p2: Point, p3: Point, out: &mut Vec<[Point; 3]>) {
    if level == 0 {
        out.push([p1, p2, p3]);
        return;
    }

    let m12 = p1.midpoint(p2);
    let m23 = p2.midpoint(p3);
    let m31 = p3.midpoint(p1);

    sierpinski_recurse(level - 1, p1, m12, m31, out);
    sierpinski_recurse(level - 1, m12, p2, m23, out);
    sierpinski_recurse(level - 1, m31, m23, p3, out);
}

impl Pixmap {
    /// Draw a Koch curve over the horizontal segment from `start` to
    /// `start + (width, 0)`.
    pub fn draw_koch_snowflake(&mut self, level: u32, start: Point, width: i32, color: Rgb) {
        let end = start.offset(width, 0);
        for (a, b) in koch_segments(level, start, end) {
            self.draw_line(a, b, color);
        }
    }

    /// Draw a Sierpinski triangle whose corner triangles are filled with
    /// [`Pixmap::draw_filled_triangle`].
    pub fn draw_sierpinski_triangle(&mut self, level: u32, start: Point, width: i32, color: Rgb) {
        for [p1, p2, p3] in sierpinski_triangles(level, start, width) {
            self.draw_filled_triangle(p1, p2, p3, color);
        }
    }
}
