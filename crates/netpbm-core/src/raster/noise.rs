//! Procedural noise fill
//!
//! A deterministic multi-octave lattice noise field blended between two
//! colors. The lattice value comes from an integer hash of the truncated
//! coordinates, so identical inputs always reproduce identical images.

use super::{Pixmap, Rgb};

/// Parameters of the multi-octave noise field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Coordinate multiplier applied to pixel positions
    pub scale: f64,
    /// Number of octaves summed
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves
    pub persistence: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: 0.1,
            octaves: 4,
            persistence: 0.5,
        }
    }
}

impl NoiseParams {
    /// Set the coordinate scale
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of octaves
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set the persistence
    pub fn persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }
}

/// Lattice noise at the integer cell containing `(x, y)`.
///
/// Coordinates are truncated toward zero, combined as `x + 57 * y` and
/// scrambled with shifts, XOR and wrapping multiplies. The result lies in
/// `(-1, 1]`.
pub fn lattice_noise(x: f64, y: f64) -> f64 {
    let mut n = (x as i64).wrapping_add((y as i64).wrapping_mul(57));
    n = (n << 13) ^ n;
    let hashed = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - hashed as f64 / 1_073_741_824.0
}

/// Sum of `params.octaves` lattice-noise octaves at `(x, y)`, normalized
/// by the summed amplitudes.
///
/// Each octave doubles the frequency and multiplies the amplitude by the
/// persistence. Zero octaves yield 0.
pub fn fractal_noise(x: f64, y: f64, params: &NoiseParams) -> f64 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..params.octaves {
        total += lattice_noise(x * frequency, y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= params.persistence;
        frequency *= 2.0;
    }

    if max_value == 0.0 {
        return 0.0;
    }
    total / max_value
}

/// Blend two colors channel-wise: `c1 * (1 - t) + c2 * t`.
///
/// `t` is not limited to `[0, 1]`; channels saturate at 0 and 255.
pub fn lerp_rgb(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let lerp = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    Rgb {
        r: lerp(c1.r, c2.r),
        g: lerp(c1.g, c2.g),
        b: lerp(c1.b, c2.b),
    }
}

impl Pixmap {
    /// Fill the whole pixmap with noise blended between `color1` and
    /// `color2`, using the default [`NoiseParams`].
    pub fn perlin_fill(&mut self, color1: Rgb, color2: Rgb) {
        self.perlin_fill_with(color1, color2, &NoiseParams::default());
    }

    /// Fill the whole pixmap with noise blended between `color1` and
    /// `color2`.
    pub fn perlin_fill_with(&mut self, color1: Rgb, color2: Rgb, params: &NoiseParams) {
        for y in 0..self.height {
            for x in 0..self.width {
                let t = fractal_noise(x as f64 * params.scale, y as f64 * params.scale, params);
                self.set_unchecked(x, y, lerp_rgb(color1, color2, t));
            }
        }
    }
}
