//! Graphics rendering functions
//!
//! This module provides functions for drawing shapes on pixmaps:
//! - Lines (integer Bresenham)
//! - Rectangles (outline, filled)
//! - Circles (ring, filled)
//! - Triangles (outline, filled)
//! - Polygons (outline, even-odd scanline fill)
//!
//! Every shape is generated as a sequence of [`Point`]s already clipped to
//! the canvas [`Bounds`], so the work and memory of a draw call follow the
//! visible part of the shape rather than its full extent. The `*_points`
//! functions collect that sequence; the [`Pixmap`] painters plot it as it
//! is produced. Nothing is ever an error, and degenerate shapes draw what
//! their points describe (or nothing).
//!
//! Coordinates may be anywhere in the `i32` range. Internal arithmetic is
//! done in `i64`/`i128`, so no input overflows.

use super::{Pixmap, Rgb};
use crate::point::Point;

/// Ring radius as a fraction of the requested circle radius.
pub const CIRCLE_RING_FACTOR: f64 = 0.85;

/// Half-width of the ring band, in pixels.
const CIRCLE_RING_TOLERANCE: f64 = 0.5;

/// Canvas size that point generators clip against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` is a canvas pixel.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

type Plot<'a> = &'a mut dyn FnMut(Point);

fn collect(visit: impl FnOnce(Plot)) -> Vec<Point> {
    let mut pts = Vec::new();
    visit(&mut |p| pts.push(p));
    pts
}

// =============================================================================
// Lines
// =============================================================================

/// One axis of a line: coordinate `start + step * offset` for
/// `offset` in `0..=len`, on a canvas side of `size` pixels.
#[derive(Clone, Copy)]
struct Axis {
    start: i64,
    step: i64,
    len: i64,
    size: i64,
}

impl Axis {
    fn new(from: i32, to: i32, size: u32) -> Self {
        let delta = to as i64 - from as i64;
        Self {
            start: from as i64,
            step: delta.signum(),
            len: delta.abs(),
            size: size as i64,
        }
    }

    /// Offsets whose coordinate lies on the canvas.
    fn visible(self) -> Option<(i64, i64)> {
        let (lo, hi) = match self.step {
            1 => (-self.start, self.size - 1 - self.start),
            -1 => (self.start - (self.size - 1), self.start),
            _ if (0..self.size).contains(&self.start) => (0, 0),
            _ => return None,
        };
        let (lo, hi) = (lo.max(0), hi.min(self.len));
        (lo <= hi).then_some((lo, hi))
    }

    fn at(self, offset: i64) -> i32 {
        (self.start + self.step * offset) as i32
    }
}

/// Minor-axis offset of Bresenham step `i`, for a line whose major and
/// minor deltas are `major >= minor`.
///
/// With the error term started at `dx - dy`, the minor coordinate advances
/// on step `i` exactly when it is behind `ceil((2 * i * minor - major) /
/// (2 * major))`.
fn minor_offset(i: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    ((2 * i as i128 * minor as i128 + major as i128 - 1) / (2 * major as i128)) as i64
}

fn div_floor(a: i128, b: i128) -> i128 {
    a.div_euclid(b)
}

fn div_ceil(a: i128, b: i128) -> i128 {
    -(-a).div_euclid(b)
}

fn visit_line(p1: Point, p2: Point, bounds: Bounds, plot: Plot) {
    let ax = Axis::new(p1.x, p2.x, bounds.width);
    let ay = Axis::new(p1.y, p2.y, bounds.height);
    let (major, minor, x_major) = if ax.len >= ay.len {
        (ax, ay, true)
    } else {
        (ay, ax, false)
    };

    let (Some((mut lo, mut hi)), Some((klo, khi))) = (major.visible(), minor.visible()) else {
        return;
    };
    if minor.len > 0 {
        // Narrow the major steps to those whose minor offset is visible.
        let (m, n) = (major.len as i128, minor.len as i128);
        let first = div_ceil(2 * m * klo as i128 - m + 1, 2 * n);
        let last = div_floor(2 * m * (khi as i128 + 1) - m, 2 * n);
        lo = lo.max(first.clamp(i64::MIN as i128, i64::MAX as i128) as i64);
        hi = hi.min(last.clamp(i64::MIN as i128, i64::MAX as i128) as i64);
    }

    for i in lo..=hi {
        let k = minor_offset(i, major.len, minor.len);
        let (a, b) = (major.at(i), minor.at(k));
        plot(if x_major { Point::new(a, b) } else { Point::new(b, a) });
    }
}

/// Generate the visible points of a line using Bresenham's integer
/// algorithm.
///
/// The line connects `p1` to `p2` with 8-connectivity and includes both
/// endpoints. Points are returned in drawing order, starting at the first
/// one on the canvas; the off-canvas steps are skipped without being
/// walked.
pub fn line_points(p1: Point, p2: Point, bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_line(p1, p2, bounds, plot))
}

// =============================================================================
// Rectangles and polylines
// =============================================================================

fn visit_polyline(vertices: &[Point], close: bool, bounds: Bounds, plot: Plot) {
    for pair in vertices.windows(2) {
        visit_line(pair[0], pair[1], bounds, plot);
    }
    if close && let (Some(&last), Some(&first)) = (vertices.last(), vertices.first()) {
        visit_line(last, first, bounds, plot);
    }
}

fn rectangle_corners(origin: Point, width: i32, height: i32) -> [Point; 4] {
    [
        origin,
        origin.offset(width, 0),
        origin.offset(width, height),
        origin.offset(0, height),
    ]
}

fn visit_filled_rectangle(origin: Point, width: i32, height: i32, bounds: Bounds, plot: Plot) {
    let top = origin.y as i64;
    let bottom = top + height as i64;
    let first = top.max(0);
    let last = bottom.min(bounds.height as i64 - 1);
    for y in first..=last {
        let left = Point::new(origin.x, y as i32);
        visit_line(left, left.offset(width, 0), bounds, plot);
    }
}

/// Generate the outline of an axis-aligned rectangle.
///
/// The corners are `origin` and `origin + (width, height)`, both inclusive.
pub fn rectangle_points(origin: Point, width: i32, height: i32, bounds: Bounds) -> Vec<Point> {
    let corners = rectangle_corners(origin, width, height);
    collect(|plot| visit_polyline(&corners, true, bounds, plot))
}

/// Generate a filled rectangle, one horizontal line per row from
/// `origin.y` to `origin.y + height` inclusive. Rows off the canvas are
/// skipped.
pub fn filled_rectangle_points(
    origin: Point,
    width: i32,
    height: i32,
    bounds: Bounds,
) -> Vec<Point> {
    collect(|plot| visit_filled_rectangle(origin, width, height, bounds, plot))
}

/// Generate a polyline connecting consecutive vertices.
///
/// If `close` is true, the last vertex is connected back to the first.
pub fn polyline_points(vertices: &[Point], close: bool, bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_polyline(vertices, close, bounds, plot))
}

// =============================================================================
// Circles
// =============================================================================

fn distance(center: Point, x: i64, y: i64) -> f64 {
    let dx = (x - center.x as i64) as f64;
    let dy = (y - center.y as i64) as f64;
    (dx * dx + dy * dy).sqrt()
}

fn on_ring(distance: f64, radius: u32) -> bool {
    let ring = radius as f64 * CIRCLE_RING_FACTOR;
    (distance - ring).abs() < CIRCLE_RING_TOLERANCE
}

fn visit_canvas(bounds: Bounds, keep: impl Fn(i64, i64) -> bool, plot: Plot) {
    for y in 0..bounds.height as i64 {
        for x in 0..bounds.width as i64 {
            if keep(x, y) {
                plot(Point::new(x as i32, y as i32));
            }
        }
    }
}

/// Generate an approximate circle ring.
///
/// A canvas pixel belongs to the ring when its distance from `center` is
/// within 0.5 of `radius * 0.85`.
pub fn ring_points(center: Point, radius: u32, bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_canvas(bounds, |x, y| on_ring(distance(center, x, y), radius), plot))
}

/// Whether some ring of radius `0..=radius` covers a pixel at `distance`.
///
/// Rings of radius `r` cover distances within 0.5 of `0.85 * r`, so only
/// the radii next to `distance / 0.85` can match.
fn in_disk(distance: f64, radius: u32) -> bool {
    let nearest = (distance / CIRCLE_RING_FACTOR).floor() as i64;
    (nearest - 1..=nearest + 2)
        .filter(|r| (0..=radius as i64).contains(r))
        .any(|r| on_ring(distance, r as u32))
}

/// Generate the union of the rings for every radius from `radius` down to
/// 0.
pub fn disk_points(center: Point, radius: u32, bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_canvas(bounds, |x, y| in_disk(distance(center, x, y), radius), plot))
}

// =============================================================================
// Filled triangles
// =============================================================================

/// Integer steps `t` in `lo..=hi` with `a + b * t > 0`.
fn positive_steps(a: i128, b: i128, (lo, hi): (i64, i64)) -> Option<(i64, i64)> {
    let (lo, hi) = (lo as i128, hi as i128);
    let (lo, hi) = match b.signum() {
        1 => (lo.max(div_floor(-a, b) + 1), hi),
        -1 => (lo, hi.min(div_ceil(a, -b) - 1)),
        _ if a > 0 => (lo, hi),
        _ => return None,
    };
    (lo <= hi).then_some((lo as i64, hi as i64))
}

fn intersect(r: Option<(i64, i64)>, s: Option<(i64, i64)>) -> Option<(i64, i64)> {
    let ((a, b), (c, d)) = (r?, s?);
    let (lo, hi) = (a.max(c), b.min(d));
    (lo <= hi).then_some((lo, hi))
}

/// A straight run of the dragged vertex: `start + t * dir` for `t` in
/// `0..=len`.
#[derive(Clone, Copy)]
struct Drag {
    start: Point,
    dir: (i64, i64),
    len: i64,
}

impl Drag {
    fn at(&self, t: i64) -> Point {
        Point::new(
            (self.start.x as i64 + self.dir.0 * t) as i32,
            (self.start.y as i64 + self.dir.1 * t) as i32,
        )
    }

    /// Steps whose leg from `apex` may reach the canvas.
    ///
    /// A step is dropped when the leg's bounding box misses the canvas, or
    /// when all four corners of the canvas (grown by one pixel for the
    /// Bresenham error) lie strictly on one side of the leg's line. Each
    /// test is linear in `t`, so the kept steps form at most three runs.
    fn candidate_runs(&self, apex: Point, bounds: Bounds) -> Vec<(i64, i64)> {
        let (qx, qy) = (self.start.x as i128, self.start.y as i128);
        let (dx, dy) = (self.dir.0 as i128, self.dir.1 as i128);
        let (px, py) = (apex.x as i128, apex.y as i128);
        let (w, h) = (bounds.width as i128, bounds.height as i128);

        let mut run = Some((0, self.len));
        if px < 0 {
            run = intersect(run, positive_steps(qx + 1, dx, (0, self.len)));
        }
        if px > w - 1 {
            run = intersect(run, positive_steps(w - qx, -dx, (0, self.len)));
        }
        if py < 0 {
            run = intersect(run, positive_steps(qy + 1, dy, (0, self.len)));
        }
        if py > h - 1 {
            run = intersect(run, positive_steps(h - qy, -dy, (0, self.len)));
        }
        let Some(run) = run else {
            return Vec::new();
        };

        let mut left = Some(run);
        let mut right = Some(run);
        for (cx, cy) in [(-1, -1), (w, -1), (-1, h), (w, h)] {
            let (ux, uy) = (cx - px, cy - py);
            let a = (qx - px) * uy - (qy - py) * ux;
            let b = dx * uy - dy * ux;
            left = intersect(left, positive_steps(a, b, run));
            right = intersect(right, positive_steps(-a, -b, run));
        }

        let mut excluded: Vec<(i64, i64)> = [left, right].into_iter().flatten().collect();
        excluded.sort_unstable();
        let mut runs = Vec::new();
        let mut next = run.0;
        for (lo, hi) in excluded {
            if lo > next {
                runs.push((next, lo - 1));
            }
            next = next.max(hi.saturating_add(1));
        }
        if next <= run.1 {
            runs.push((next, run.1));
        }
        runs
    }
}

fn visit_filled_triangle(p1: Point, p2: Point, p3: Point, bounds: Bounds, plot: Plot) {
    if bounds.is_empty() {
        return;
    }
    let dx = p2.x as i64 - p1.x as i64;
    let dy = p2.y as i64 - p1.y as i64;
    let (sx, sy) = (dx.signum(), dy.signum());
    let diagonal = dx.abs().min(dy.abs());
    let straight = dx.abs().max(dy.abs()) - diagonal;

    // The dragged vertex first moves diagonally, then along one axis.
    let corner = Point::saturating(p1.x as i64 + sx * diagonal, p1.y as i64 + sy * diagonal);
    let mut runs = Vec::with_capacity(2);
    if diagonal > 0 {
        runs.push(Drag {
            start: p1,
            dir: (sx, sy),
            len: diagonal - 1,
        });
    }
    runs.push(Drag {
        start: corner,
        dir: if dx.abs() > dy.abs() { (sx, 0) } else { (0, sy) },
        len: straight,
    });

    for drag in runs {
        for (lo, hi) in drag.candidate_runs(p3, bounds) {
            for t in lo..=hi {
                visit_line(p3, drag.at(t), bounds, plot);
            }
        }
    }
}

/// Generate a filled triangle by dragging `p1` toward `p2` one step at a
/// time and drawing a line from `p3` to each intermediate position.
///
/// This approximates a fill; thin slivers may stay uncovered for some
/// vertex orders. Positions whose leg cannot reach the canvas are skipped
/// in runs, so far off-canvas triangles cost little.
pub fn filled_triangle_points(p1: Point, p2: Point, p3: Point, bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_filled_triangle(p1, p2, p3, bounds, plot))
}

// =============================================================================
// Filled polygons
// =============================================================================

/// X coordinates where scanline `y` crosses the polygon edges, sorted.
///
/// Horizontal edges never cross. An edge spanning `lo..hi` in y crosses
/// rows `lo <= y < hi`, except on the polygon's bottom-most row
/// (`y == max_y`) where it crosses `lo < y <= hi` so that the closing row
/// is filled too.
fn scanline_crossings(vertices: &[Point], y: i64, max_y: i64) -> Vec<i64> {
    let n = vertices.len();
    let mut xs = Vec::new();
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        let (ax, ay, bx, by) = (a.x as i64, a.y as i64, b.x as i64, b.y as i64);
        if ay == by {
            continue;
        }
        let (lo, hi) = (ay.min(by), ay.max(by));
        let crosses = if y < max_y {
            lo <= y && y < hi
        } else {
            lo < y && y <= hi
        };
        if crosses {
            let slope = (bx - ax) as f64 / (by - ay) as f64;
            xs.push(((y - ay) as f64 * slope) as i64 + ax);
        }
    }
    xs.sort_unstable();
    xs
}

fn visit_span(x0: i64, x1: i64, y: i64, bounds: Bounds, plot: Plot) {
    let first = x0.max(0);
    let last = x1.min(bounds.width as i64 - 1);
    for x in first..=last {
        plot(Point::new(x as i32, y as i32));
    }
}

fn visit_filled_polygon(vertices: &[Point], bounds: Bounds, plot: Plot) {
    if vertices.len() < 3 || bounds.is_empty() {
        return;
    }

    let min_y = vertices.iter().map(|p| p.y as i64).min().unwrap_or(0);
    let max_y = vertices.iter().map(|p| p.y as i64).max().unwrap_or(0);

    if min_y == max_y {
        // Flat polygon: every edge is horizontal.
        if bounds.contains(0, min_y) {
            let min_x = vertices.iter().map(|p| p.x as i64).min().unwrap_or(0);
            let max_x = vertices.iter().map(|p| p.x as i64).max().unwrap_or(0);
            visit_span(min_x, max_x, min_y, bounds, plot);
        }
        return;
    }

    let first = min_y.max(0);
    let last = max_y.min(bounds.height as i64 - 1);
    for y in first..=last {
        let xs = scanline_crossings(vertices, y, max_y);
        for span in xs.chunks_exact(2) {
            visit_span(span[0], span[1], y, bounds, plot);
        }
    }
}

/// Generate the interior of a polygon with the even-odd rule.
///
/// For every scanline between the lowest and highest vertex, edge
/// crossings are sorted and spans `(x[0], x[1]), (x[2], x[3]), ...` are
/// filled inclusively. Only canvas rows are scanned and every span is
/// clipped to the canvas. Fewer than three vertices produce nothing.
pub fn filled_polygon_points(vertices: &[Point], bounds: Bounds) -> Vec<Point> {
    collect(|plot| visit_filled_polygon(vertices, bounds, plot))
}

// =============================================================================
// Pixmap rendering implementations
// =============================================================================

impl Pixmap {
    /// The canvas size, for the point generators.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Paint every point with `color`.
    ///
    /// Points outside the canvas are skipped. The color is clamped to the
    /// raster's maximum value.
    pub fn render_points(&mut self, pts: &[Point], color: Rgb) {
        let color = color.map(|c| c.min(self.max));
        for p in pts {
            self.put_clipped(p.x, p.y, color);
        }
    }

    /// Plot a generated shape as it is produced.
    fn paint(&mut self, color: Rgb, shape: impl FnOnce(Bounds, Plot)) {
        let color = color.map(|c| c.min(self.max));
        let bounds = self.bounds();
        shape(bounds, &mut |p| {
            self.put_clipped(p.x, p.y, color);
        });
    }

    /// Draw a line from `p1` to `p2`.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb) {
        self.paint(color, |b, plot| visit_line(p1, p2, b, plot));
    }

    /// Draw a rectangle outline with top-left corner `origin`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Rgb) {
        let corners = rectangle_corners(origin, width, height);
        self.paint(color, |b, plot| visit_polyline(&corners, true, b, plot));
    }

    /// Draw a filled rectangle with top-left corner `origin`.
    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Rgb) {
        self.paint(color, |b, plot| {
            visit_filled_rectangle(origin, width, height, b, plot)
        });
    }

    /// Draw an approximate circle ring of radius `0.85 * radius`.
    pub fn draw_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.paint(color, |b, plot| {
            visit_canvas(b, |x, y| on_ring(distance(center, x, y), radius), plot)
        });
    }

    /// Draw a filled circle: the concentric rings from `radius` down to 0,
    /// tested per canvas pixel.
    pub fn draw_filled_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.paint(color, |b, plot| {
            visit_canvas(b, |x, y| in_disk(distance(center, x, y), radius), plot)
        });
    }

    /// Draw a triangle outline.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb) {
        self.paint(color, |b, plot| visit_polyline(&[p1, p2, p3], true, b, plot));
    }

    /// Draw a filled triangle (see [`filled_triangle_points`]).
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb) {
        self.paint(color, |b, plot| visit_filled_triangle(p1, p2, p3, b, plot));
    }

    /// Draw a closed polygon outline.
    ///
    /// Fewer than three vertices draw nothing, as for the filled polygon.
    pub fn draw_polygon(&mut self, vertices: &[Point], color: Rgb) {
        if vertices.len() < 3 {
            return;
        }
        self.paint(color, |b, plot| visit_polyline(vertices, true, b, plot));
    }

    /// Draw a filled polygon (see [`filled_polygon_points`]).
    pub fn draw_filled_polygon(&mut self, vertices: &[Point], color: Rgb) {
        self.paint(color, |b, plot| visit_filled_polygon(vertices, b, plot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoding;
    use std::collections::HashSet;

    const BIG: Bounds = Bounds::new(64, 64);

    /// Reference Bresenham that walks every step, for comparison with the
    /// clipped generator.
    fn walk_line(p1: Point, p2: Point) -> Vec<Point> {
        let dx = (p2.x - p1.x).abs();
        let dy = (p2.y - p1.y).abs();
        let (sx, sy) = ((p2.x - p1.x).signum(), (p2.y - p1.y).signum());
        let mut err = dx - dy;
        let mut p = p1;
        let mut pts = vec![p];
        while p != p2 {
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                p.x += sx;
            }
            if e2 < dx {
                err += dx;
                p.y += sy;
            }
            pts.push(p);
        }
        pts
    }

    fn canvas(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h, 255, Encoding::Binary).unwrap()
    }

    fn painted(pix: &Pixmap) -> HashSet<(u32, u32)> {
        let mut set = HashSet::new();
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if pix.get_unchecked(x, y) != Rgb::BLACK {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn test_line_horizontal() {
        let pts = line_points(Point::new(0, 0), Point::new(3, 0), BIG);
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_line_diagonal() {
        let pts = line_points(Point::new(0, 0), Point::new(2, 2), BIG);
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn test_line_single_point_and_reverse() {
        assert_eq!(
            line_points(Point::new(5, 5), Point::new(5, 5), BIG),
            vec![Point::new(5, 5)]
        );
        let pts = line_points(Point::new(0, 4), Point::new(0, 0), BIG);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.last(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn test_draw_line_clips() {
        let mut pix = canvas(4, 4);
        pix.draw_line(Point::new(-2, 1), Point::new(10, 1), Rgb::RED);
        let expected: HashSet<_> = (0..4).map(|x| (x, 1)).collect();
        assert_eq!(painted(&pix), expected);
    }

    #[test]
    fn test_color_clamped_to_max() {
        let mut pix = Pixmap::new(2, 1, 100, Encoding::Ascii).unwrap();
        pix.draw_line(Point::new(0, 0), Point::new(1, 0), Rgb::new(255, 50, 200));
        assert_eq!(pix.get(1, 0), Some(Rgb::new(100, 50, 100)));
    }

    #[test]
    fn test_rectangle_outline() {
        let mut pix = canvas(10, 10);
        pix.draw_rectangle(Point::new(2, 2), 5, 3, Rgb::GREEN);
        let set = painted(&pix);
        for corner in [(2, 2), (7, 2), (2, 5), (7, 5)] {
            assert!(set.contains(&corner), "missing corner {corner:?}");
        }
        assert!(!set.contains(&(4, 3)));
        assert_eq!(set.len(), 2 * 6 + 2 * 2);
    }

    #[test]
    fn test_filled_rectangle() {
        let mut pix = canvas(10, 10);
        pix.draw_filled_rectangle(Point::new(1, 1), 3, 2, Rgb::BLUE);
        assert_eq!(painted(&pix).len(), 4 * 3);
        assert_eq!(pix.get(4, 3), Some(Rgb::BLUE));
        assert_eq!(pix.get(5, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_circle_ring() {
        let mut pix = canvas(50, 50);
        pix.draw_circle(Point::new(25, 25), 20, Rgb::WHITE);
        // ring radius = 17
        assert_eq!(pix.get(42, 25), Some(Rgb::WHITE));
        assert_eq!(pix.get(25, 8), Some(Rgb::WHITE));
        assert_eq!(pix.get(25, 25), Some(Rgb::BLACK));
        assert_eq!(pix.get(45, 25), Some(Rgb::BLACK));
    }

    #[test]
    fn test_filled_circle_is_solid() {
        let mut pix = canvas(50, 50);
        pix.draw_filled_circle(Point::new(25, 25), 20, Rgb::WHITE);
        for y in 0..50i32 {
            for x in 0..50i32 {
                let d = (((x - 25) * (x - 25) + (y - 25) * (y - 25)) as f64).sqrt();
                if d <= 17.0 {
                    assert_eq!(pix.get(x as u32, y as u32), Some(Rgb::WHITE), "({x}, {y})");
                }
                if d >= 17.5 {
                    assert_eq!(pix.get(x as u32, y as u32), Some(Rgb::BLACK), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_triangle_outline() {
        let mut pix = canvas(10, 10);
        pix.draw_triangle(Point::new(0, 0), Point::new(6, 0), Point::new(0, 6), Rgb::RED);
        let set = painted(&pix);
        assert!(set.contains(&(0, 0)) && set.contains(&(6, 0)) && set.contains(&(0, 6)));
        assert!(set.contains(&(3, 3)));
        assert!(!set.contains(&(1, 1)));
    }

    #[test]
    fn test_filled_triangle() {
        let mut pix = canvas(6, 6);
        pix.draw_filled_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), Rgb::RED);
        let set = painted(&pix);
        assert!(set.contains(&(0, 0)) && set.contains(&(4, 0)) && set.contains(&(0, 4)));
        assert!(set.contains(&(1, 1)));
        assert!(!set.contains(&(4, 4)));
    }

    #[test]
    fn test_polygon_outline_closes() {
        let square = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let mut pix = canvas(5, 5);
        pix.draw_polygon(&square, Rgb::RED);
        let set = painted(&pix);
        assert_eq!(set.len(), 12);
        assert!(set.contains(&(0, 2)));
    }

    #[test]
    fn test_filled_polygon_square() {
        let square = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let mut pix = canvas(6, 6);
        pix.draw_filled_polygon(&square, Rgb::RED);
        let expected: HashSet<_> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        assert_eq!(painted(&pix), expected);
    }

    #[test]
    fn test_filled_polygon_diamond() {
        let diamond = [
            Point::new(2, 0),
            Point::new(4, 2),
            Point::new(2, 4),
            Point::new(0, 2),
        ];
        let pts = filled_polygon_points(&diamond, BIG);
        let rows: Vec<usize> = (0..=4)
            .map(|y| pts.iter().filter(|p| p.y == y).count())
            .collect();
        assert_eq!(rows, vec![1, 3, 5, 3, 1]);
    }

    #[test]
    fn test_filled_polygon_degenerate() {
        let mut pix = canvas(4, 4);
        pix.draw_filled_polygon(&[Point::new(0, 0), Point::new(3, 3)], Rgb::RED);
        assert!(painted(&pix).is_empty());
        pix.draw_polygon(&[], Rgb::RED);
        assert!(painted(&pix).is_empty());
    }

    #[test]
    fn test_filled_polygon_off_canvas() {
        let mut pix = canvas(4, 4);
        let big = [
            Point::new(-10, -10),
            Point::new(10, -10),
            Point::new(10, 10),
            Point::new(-10, 10),
        ];
        pix.draw_filled_polygon(&big, Rgb::GREEN);
        assert_eq!(painted(&pix).len(), 16);
    }

    #[test]
    fn test_clipped_line_matches_full_walk() {
        let bounds = Bounds::new(7, 5);
        let coords = [-9, -3, -1, 0, 2, 4, 6, 11];
        for &x1 in &coords {
            for &y1 in &coords {
                for &x2 in &coords {
                    for &y2 in &coords {
                        let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
                        let expected: Vec<Point> = walk_line(p1, p2)
                            .into_iter()
                            .filter(|p| bounds.contains(p.x as i64, p.y as i64))
                            .collect();
                        assert_eq!(line_points(p1, p2, bounds), expected, "{p1:?} -> {p2:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_line_extreme_coordinates() {
        let mut pix = canvas(4, 4);
        pix.draw_line(Point::new(i32::MIN, 1), Point::new(i32::MAX, 1), Rgb::RED);
        let expected: HashSet<_> = (0..4).map(|x| (x, 1)).collect();
        assert_eq!(painted(&pix), expected);

        let mut pix = canvas(4, 4);
        pix.draw_line(
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Rgb::RED,
        );
        let expected: HashSet<_> = (0..4).map(|x| (x, x)).collect();
        assert_eq!(painted(&pix), expected);
    }

    #[test]
    fn test_shapes_far_off_canvas_draw_nothing() {
        let mut pix = canvas(4, 4);
        let far = Point::new(i32::MAX - 10, i32::MIN + 10);
        pix.draw_line(far, far.offset(5, 5), Rgb::RED);
        pix.draw_rectangle(far, i32::MAX, i32::MAX, Rgb::RED);
        pix.draw_filled_rectangle(far, 1_000_000, 1_000_000, Rgb::RED);
        pix.draw_circle(far, u32::MAX, Rgb::RED);
        pix.draw_filled_triangle(
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(0, i32::MIN),
            Rgb::RED,
        );
        assert!(painted(&pix).is_empty());
    }

    #[test]
    fn test_huge_shapes_cover_canvas() {
        let mut pix = canvas(4, 4);
        let corner = Point::new(-20_000, -20_000);
        pix.draw_filled_rectangle(corner, 40_000, 40_000, Rgb::BLUE);
        assert_eq!(painted(&pix).len(), 16);

        let mut pix = canvas(4, 4);
        pix.draw_filled_triangle(
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(0, i32::MAX),
            Rgb::BLUE,
        );
        assert_eq!(painted(&pix).len(), 16);

        for half in [20_000, i32::MAX] {
            let square = [(-half, -half), (half, -half), (half, half), (-half, half)];
            let mut pix = canvas(4, 4);
            pix.draw_filled_polygon(&square.map(Point::from), Rgb::BLUE);
            assert_eq!(painted(&pix).len(), 16);
            let pts = filled_polygon_points(&square.map(Point::from), Bounds::new(4, 4));
            assert_eq!(pts.len(), 16);
        }

        let mut pix = canvas(4, 4);
        pix.draw_filled_circle(Point::new(1, 1), 1_000_000, Rgb::BLUE);
        assert_eq!(painted(&pix).len(), 16);
    }

    #[test]
    fn test_filled_triangle_matches_full_drag() {
        let bounds = Bounds::new(6, 5);
        let corners = [
            Point::new(-4, -2),
            Point::new(3, 2),
            Point::new(9, -1),
            Point::new(1, 8),
            Point::new(-3, 6),
        ];
        for &p1 in &corners {
            for &p2 in &corners {
                for &p3 in &corners {
                    let mut expected = HashSet::new();
                    let mut p = p1;
                    loop {
                        for q in walk_line(p3, p) {
                            if bounds.contains(q.x as i64, q.y as i64) {
                                expected.insert(q);
                            }
                        }
                        if p == p2 {
                            break;
                        }
                        p.x += (p2.x - p.x).signum();
                        p.y += (p2.y - p.y).signum();
                    }
                    let got: HashSet<_> = filled_triangle_points(p1, p2, p3, bounds)
                        .into_iter()
                        .collect();
                    assert_eq!(got, expected, "{p1:?} {p2:?} {p3:?}");
                }
            }
        }
    }

    #[test]
    fn test_generators_match_painters() {
        let bounds = Bounds::new(12, 10);
        let zigzag = [Point::new(0, 9), Point::new(11, 0), Point::new(3, 3)];
        let shapes: [(Vec<Point>, fn(&mut Pixmap)); 5] = [
            (rectangle_points(Point::new(-2, 3), 8, 9, bounds), |p: &mut Pixmap| {
                p.draw_rectangle(Point::new(-2, 3), 8, 9, Rgb::RED)
            }),
            (filled_rectangle_points(Point::new(5, -4), 20, 6, bounds), |p: &mut Pixmap| {
                p.draw_filled_rectangle(Point::new(5, -4), 20, 6, Rgb::RED)
            }),
            (polyline_points(&zigzag, false, bounds), |p: &mut Pixmap| {
                let zigzag = [Point::new(0, 9), Point::new(11, 0), Point::new(3, 3)];
                let pts = polyline_points(&zigzag, false, p.bounds());
                p.render_points(&pts, Rgb::RED)
            }),
            (ring_points(Point::new(6, 5), 6, bounds), |p: &mut Pixmap| {
                p.draw_circle(Point::new(6, 5), 6, Rgb::RED)
            }),
            (disk_points(Point::new(6, 5), 6, bounds), |p: &mut Pixmap| {
                p.draw_filled_circle(Point::new(6, 5), 6, Rgb::RED)
            }),
        ];
        for (i, (pts, draw)) in shapes.into_iter().enumerate() {
            assert!(pts.iter().all(|p| bounds.contains(p.x as i64, p.y as i64)));
            let mut pix = canvas(12, 10);
            draw(&mut pix);
            let expected: HashSet<_> = pts.iter().map(|p| (p.x as u32, p.y as u32)).collect();
            assert_eq!(painted(&pix), expected, "shape {i}");
        }
    }

    #[test]
    fn test_disk_is_union_of_rings() {
        let bounds = Bounds::new(30, 30);
        let center = Point::new(13, 16);
        let mut rings = HashSet::new();
        for r in 0..=12 {
            rings.extend(ring_points(center, r, bounds));
        }
        let disk: HashSet<_> = disk_points(center, 12, bounds).into_iter().collect();
        assert_eq!(disk, rings);
    }
}
