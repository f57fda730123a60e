//! Orthogonal rotation and mirroring
//!
//! All functions return a new raster with the source's kind, maximum value
//! and encoding. Quarter turns swap width and height.

use netpbm_core::{Raster, Sample};

/// Rotate a raster by 90-degree increments
///
/// # Arguments
/// * `raster` - Input raster
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
pub fn rotate_orth<S: Sample>(raster: &Raster<S>, quads: u32) -> Raster<S> {
    match quads % 4 {
        0 => raster.clone(),
        1 => rotate_90(raster, true),
        2 => rotate_180(raster),
        _ => rotate_90(raster, false),
    }
}

/// Rotate a raster 90 degrees
///
/// A `w x h` raster becomes `h x w`. Clockwise, the source pixel at
/// `(x, y)` lands at `(h - 1 - y, x)`.
///
/// # Arguments
/// * `raster` - Input raster
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90<S: Sample>(raster: &Raster<S>, clockwise: bool) -> Raster<S> {
    let (w, h) = raster.size();
    let mut out = raster.create_template(h, w);

    for y in 0..h {
        for x in 0..w {
            let val = raster.get_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_unchecked(nx, ny, val);
        }
    }

    out
}

/// Rotate a raster 180 degrees
pub fn rotate_180<S: Sample>(raster: &Raster<S>) -> Raster<S> {
    let mut out = raster.clone();
    rotate_180_in_place(&mut out);
    out
}

/// Rotate a raster 180 degrees in place
pub fn rotate_180_in_place<S: Sample>(raster: &mut Raster<S>) {
    raster.flip();
    raster.flop();
}

/// Flip a raster left-right (horizontal mirror)
pub fn flip_lr<S: Sample>(raster: &Raster<S>) -> Raster<S> {
    let mut out = raster.clone();
    out.flip();
    out
}

/// Flip a raster top-bottom (vertical mirror)
pub fn flip_tb<S: Sample>(raster: &Raster<S>) -> Raster<S> {
    let mut out = raster.clone();
    out.flop();
    out
}
