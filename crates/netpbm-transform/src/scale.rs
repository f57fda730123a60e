//! Nearest-neighbour scaling
//!
//! | function | target size |
//! |---|---|
//! | `resample` | exact `new_width x new_height` |
//! | `scale_to_size` | exact, or aspect-preserving when one side is 0 |
//! | `scale_by_sampling` | source size times a factor per axis |
//!
//! No interpolation is done: every destination pixel copies one source
//! pixel, so the kind, maximum value and encoding carry over unchanged.

use log::debug;
use netpbm_core::{Raster, Sample};

/// Resize a raster with nearest-neighbour sampling.
///
/// Destination pixel `(x, y)` copies source pixel
/// `(x * width / new_width, y * height / new_height)` (integer division),
/// clamped to the source bounds. An empty source yields a raster of
/// default samples.
pub fn resample<S: Sample>(raster: &Raster<S>, new_width: u32, new_height: u32) -> Raster<S> {
    let (w, h) = raster.size();
    let mut out = raster.create_template(new_width, new_height);
    if raster.is_empty() {
        return out;
    }

    let src_x: Vec<u32> = (0..new_width)
        .map(|x| ((x as u64 * w as u64 / new_width as u64) as u32).min(w - 1))
        .collect();
    for y in 0..new_height {
        let sy = ((y as u64 * h as u64 / new_height as u64) as u32).min(h - 1);
        for (x, &sx) in src_x.iter().enumerate() {
            out.set_unchecked(x as u32, y, raster.get_unchecked(sx, sy));
        }
    }

    out
}

/// Scale a raster to a specific size
///
/// # Arguments
/// * `raster` - Input raster
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
///
/// If both are 0 the raster is returned unchanged.
pub fn scale_to_size<S: Sample>(raster: &Raster<S>, width: u32, height: u32) -> Raster<S> {
    let (w, h) = raster.size();
    let (width, height) = match (width, height) {
        (0, 0) => return raster.clone(),
        (0, height) => (proportional(w, height, h), height),
        (width, 0) => (width, proportional(h, width, w)),
        size => size,
    };
    resample(raster, width, height)
}

/// `side * num / den`, rounded, keeping `side` when `den` is 0.
fn proportional(side: u32, num: u32, den: u32) -> u32 {
    if den == 0 {
        return side;
    }
    let den = den as u64;
    ((side as u64 * num as u64 + den / 2) / den) as u32
}

/// Scale a raster using nearest-neighbour sampling
///
/// # Arguments
/// * `raster` - Input raster
/// * `scale_x` - Horizontal scale factor
/// * `scale_y` - Vertical scale factor
///
/// Output sides are the scaled sides rounded to the nearest integer;
/// non-positive factors give an empty side.
pub fn scale_by_sampling<S: Sample>(raster: &Raster<S>, scale_x: f32, scale_y: f32) -> Raster<S> {
    let (w, h) = raster.size();
    let new_w = (w as f32 * scale_x).round().max(0.0) as u32;
    let new_h = (h as f32 * scale_y).round().max(0.0) as u32;
    debug!(
        "scale_by_sampling: {}x{} by ({}, {}) -> {}x{}",
        w, h, scale_x, scale_y, new_w, new_h
    );
    resample(raster, new_w, new_h)
}
