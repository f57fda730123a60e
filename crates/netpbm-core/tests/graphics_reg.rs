//! Graphics rendering regression test
//!
//! Lines, rectangles, circles, triangles and polygons drawn on pixmaps,
//! with the painted pixels counted and spot-checked.

use netpbm_core::raster::graphics::{Bounds, filled_polygon_points, line_points};
use netpbm_core::{Encoding, Pixmap, Point, Rgb};
use netpbm_test::RegParams;

fn canvas(w: u32, h: u32) -> Pixmap {
    Pixmap::new(w, h, 255, Encoding::Binary).expect("canvas")
}

fn painted(pix: &Pixmap) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get(x, y) != Some(Rgb::BLACK) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn graphics_reg() {
    let mut rp = RegParams::new("graphics");

    // --- Lines ---
    let mut pix = canvas(8, 8);
    pix.draw_line(Point::new(0, 0), Point::new(3, 0), Rgb::WHITE);
    rp.compare_values(
        1.0,
        if painted(&pix) == [(0, 0), (1, 0), (2, 0), (3, 0)] { 1.0 } else { 0.0 },
        0.0,
    );

    let mut pix = canvas(8, 8);
    pix.draw_line(Point::new(0, 0), Point::new(2, 2), Rgb::WHITE);
    rp.compare_values(
        1.0,
        if painted(&pix) == [(0, 0), (1, 1), (2, 2)] { 1.0 } else { 0.0 },
        0.0,
    );

    // Reversed endpoints cover the same pixels for axis-aligned lines
    let bounds = Bounds::new(8, 8);
    let mut fwd = line_points(Point::new(1, 5), Point::new(6, 5), bounds);
    let mut rev = line_points(Point::new(6, 5), Point::new(1, 5), bounds);
    fwd.sort_by_key(|p| (p.x, p.y));
    rev.sort_by_key(|p| (p.x, p.y));
    rp.compare_values(1.0, if fwd == rev { 1.0 } else { 0.0 }, 0.0);

    // Off-canvas parts are skipped pixel by pixel
    let mut pix = canvas(4, 4);
    pix.draw_line(Point::new(-5, -5), Point::new(10, 10), Rgb::RED);
    rp.compare_values(4.0, painted(&pix).len() as f64, 0.0);

    // --- Rectangles ---
    let mut pix = canvas(8, 8);
    pix.draw_rectangle(Point::new(1, 1), 3, 3, Rgb::GREEN);
    rp.compare_values(12.0, painted(&pix).len() as f64, 0.0);
    rp.compare_values(1.0, if pix.get(2, 2) == Some(Rgb::BLACK) { 1.0 } else { 0.0 }, 0.0);

    let mut pix = canvas(8, 8);
    pix.draw_filled_rectangle(Point::new(1, 1), 2, 2, Rgb::GREEN);
    rp.compare_values(9.0, painted(&pix).len() as f64, 0.0);

    // --- Filled polygon: 4x4 square ---
    let square = [
        Point::new(0, 0),
        Point::new(3, 0),
        Point::new(3, 3),
        Point::new(0, 3),
    ];
    let mut pix = canvas(6, 6);
    pix.draw_filled_polygon(&square, Rgb::BLUE);
    let px = painted(&pix);
    rp.compare_values(16.0, px.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        if px.iter().all(|&(x, y)| x <= 3 && y <= 3) { 1.0 } else { 0.0 },
        0.0,
    );

    // Fewer than three vertices draw nothing
    rp.compare_values(
        0.0,
        filled_polygon_points(&square[..2], bounds).len() as f64,
        0.0,
    );

    // Polygon outline closes back to the first vertex
    let mut pix = canvas(6, 6);
    pix.draw_polygon(&square, Rgb::BLUE);
    rp.compare_values(12.0, painted(&pix).len() as f64, 0.0);

    let mut pix = canvas(6, 6);
    pix.draw_polygon(&square[..2], Rgb::BLUE);
    rp.compare_values(0.0, painted(&pix).len() as f64, 0.0);

    // --- Circles ---
    let mut pix = canvas(41, 41);
    let center = Point::new(20, 20);
    pix.draw_circle(center, 20, Rgb::WHITE);
    rp.compare_values(1.0, if pix.get(37, 20) == Some(Rgb::WHITE) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if pix.get(20, 20) == Some(Rgb::BLACK) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if pix.get(40, 20) == Some(Rgb::BLACK) { 1.0 } else { 0.0 }, 0.0);

    let mut pix = canvas(41, 41);
    pix.draw_filled_circle(center, 20, Rgb::WHITE);
    rp.compare_values(1.0, if pix.get(20, 20) == Some(Rgb::WHITE) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if pix.get(30, 20) == Some(Rgb::WHITE) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if pix.get(0, 0) == Some(Rgb::BLACK) { 1.0 } else { 0.0 }, 0.0);
    rp.write_raster_and_check(&pix).expect("write filled circle");

    // --- Triangles ---
    let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
    let mut outline = canvas(12, 12);
    outline.draw_triangle(a, b, c, Rgb::RED);
    let mut filled = canvas(12, 12);
    filled.draw_filled_triangle(a, b, c, Rgb::RED);
    let outline_px = painted(&outline);
    let filled_px = painted(&filled);
    rp.compare_values(1.0, if filled_px.len() > outline_px.len() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if filled.get(3, 4) == Some(Rgb::RED) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if filled.get(8, 8) == Some(Rgb::BLACK) { 1.0 } else { 0.0 }, 0.0);

    // --- Colors are clamped to the raster maximum ---
    let mut pix = Pixmap::new(4, 4, 100, Encoding::Ascii).expect("max 100 canvas");
    pix.draw_filled_rectangle(Point::new(0, 0), 3, 3, Rgb::new(255, 50, 200));
    rp.compare_values(
        1.0,
        if pix.pixels().iter().all(|&p| p == Rgb::new(100, 50, 100)) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Shapes far larger than the canvas ---
    // Off-canvas steps are skipped without being walked, so these finish
    // immediately and paint only the visible pixels.
    let mut pix = canvas(4, 4);
    pix.draw_line(Point::new(i32::MIN, 1), Point::new(i32::MAX, 1), Rgb::WHITE);
    rp.compare_values(4.0, painted(&pix).len() as f64, 0.0);

    let big = [
        Point::new(-20_000, -20_000),
        Point::new(20_000, -20_000),
        Point::new(20_000, 20_000),
        Point::new(-20_000, 20_000),
    ];
    let mut pix = canvas(4, 4);
    pix.draw_filled_polygon(&big, Rgb::WHITE);
    rp.compare_values(16.0, painted(&pix).len() as f64, 0.0);

    let mut pix = canvas(4, 4);
    pix.draw_polygon(&big, Rgb::WHITE);
    rp.compare_values(0.0, painted(&pix).len() as f64, 0.0);

    let mut pix = canvas(4, 4);
    pix.draw_filled_rectangle(Point::new(i32::MIN, i32::MIN), i32::MAX, i32::MAX, Rgb::WHITE);
    rp.compare_values(0.0, painted(&pix).len() as f64, 0.0);
    pix.draw_filled_rectangle(Point::new(-1, -1), i32::MAX, i32::MAX, Rgb::WHITE);
    rp.compare_values(16.0, painted(&pix).len() as f64, 0.0);

    let mut pix = canvas(4, 4);
    pix.draw_filled_triangle(
        Point::new(i32::MIN, i32::MIN),
        Point::new(i32::MAX, i32::MIN),
        Point::new(0, i32::MAX),
        Rgb::WHITE,
    );
    rp.compare_values(16.0, painted(&pix).len() as f64, 0.0);

    let mut pix = canvas(4, 4);
    pix.draw_koch_snowflake(1, Point::new(0, 0), 1_500_000_000, Rgb::WHITE);
    rp.compare_values(4.0, painted(&pix).len() as f64, 0.0);

    assert!(rp.cleanup(), "graphics regression test failed");
}
