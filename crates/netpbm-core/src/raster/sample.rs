//! Sample kinds
//!
//! Each raster kind stores a different sample type:
//!
//! - bitmap: `bool` (set = foreground)
//! - greymap: `u8` intensity in `0..=max`
//! - pixmap: [`Rgb`] triple, each channel in `0..=max`
//!
//! The [`Sample`] trait ties a sample type to its [`ImageKind`] and to the
//! depth rules every stored value must obey.

use super::ImageKind;
use std::fmt;

/// A pixel sample that can be stored in a [`Raster`](super::Raster).
pub trait Sample: Copy + Default + PartialEq + fmt::Debug {
    /// The raster kind this sample belongs to.
    const KIND: ImageKind;

    /// Whether every channel of the sample is `<= max`.
    fn fits(self, max: u8) -> bool;

    /// The sample with every channel limited to `max`.
    fn clamped(self, max: u8) -> Self;

    /// The photographic negative of the sample relative to `max`.
    fn inverted(self, max: u8) -> Self;
}

impl Sample for bool {
    const KIND: ImageKind = ImageKind::Bitmap;

    #[inline]
    fn fits(self, _max: u8) -> bool {
        true
    }

    #[inline]
    fn clamped(self, _max: u8) -> Self {
        self
    }

    #[inline]
    fn inverted(self, _max: u8) -> Self {
        !self
    }
}

impl Sample for u8 {
    const KIND: ImageKind = ImageKind::Greymap;

    #[inline]
    fn fits(self, max: u8) -> bool {
        self <= max
    }

    #[inline]
    fn clamped(self, max: u8) -> Self {
        self.min(max)
    }

    #[inline]
    fn inverted(self, max: u8) -> Self {
        max.saturating_sub(self)
    }
}

/// RGB color triple
///
/// Colors are independent of any raster depth: callers supply channel
/// values already scaled to the target raster's `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    /// Integer-truncated mean of the three channels.
    #[inline]
    pub fn mean(self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Rgb {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Channels as an array in R, G, B order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl Sample for Rgb {
    const KIND: ImageKind = ImageKind::Pixmap;

    #[inline]
    fn fits(self, max: u8) -> bool {
        self.r <= max && self.g <= max && self.b <= max
    }

    #[inline]
    fn clamped(self, max: u8) -> Self {
        self.map(|c| c.min(max))
    }

    #[inline]
    fn inverted(self, max: u8) -> Self {
        self.map(|c| max.saturating_sub(c))
    }
}
