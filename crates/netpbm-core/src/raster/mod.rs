//! Raster - the shared pixel grid
//!
//! `Raster<S>` is the image container for all three Netpbm kinds. It owns a
//! row-major grid of `height` rows by `width` columns of samples, the
//! encoding it was read as (or should be written as), and for greymaps and
//! pixmaps the declared maximum sample value.
//!
//! # Invariants
//!
//! - The sample buffer always holds exactly `width * height` samples, so
//!   rows are never ragged.
//! - Every stored sample satisfies [`Sample::fits`] for the raster's `max`.
//!   Checked setters reject violations and unchecked setters clamp.
//! - Bitmaps never carry a `max`.
//!
//! # See also
//!
//! Netpbm: `pbm(5)`, `pgm(5)`, `ppm(5)`

mod access;
pub mod convert;
pub mod fractal;
pub mod graphics;
pub mod noise;
mod sample;

pub use sample::{Rgb, Sample};

use crate::error::{Error, Result};
use std::fmt;

/// Raster kind
///
/// Identifies which of the three Netpbm image kinds a raster holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// 1-bit image (PBM)
    Bitmap,
    /// Single-channel intensity image (PGM)
    Greymap,
    /// Three-channel RGB image (PPM)
    Pixmap,
}

impl ImageKind {
    /// Whether rasters of this kind carry a maximum sample value.
    pub fn has_max(self) -> bool {
        !matches!(self, ImageKind::Bitmap)
    }

    /// Short lowercase name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Bitmap => "bitmap",
            ImageKind::Greymap => "greymap",
            ImageKind::Pixmap => "pixmap",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pixel payload layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens (P1/P2/P3)
    #[default]
    Ascii,
    /// Raw bytes (P4/P5/P6)
    Binary,
}

/// Netpbm magic number
///
/// The closed set of on-disk encodings. A magic number is the combination
/// of an [`ImageKind`] and an [`Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magic {
    /// ASCII bitmap
    P1,
    /// ASCII greymap
    P2,
    /// ASCII pixmap
    P3,
    /// Binary bitmap
    P4,
    /// Binary greymap
    P5,
    /// Binary pixmap
    P6,
}

impl Magic {
    /// All six magic numbers in numeric order.
    pub const ALL: [Magic; 6] = [
        Magic::P1,
        Magic::P2,
        Magic::P3,
        Magic::P4,
        Magic::P5,
        Magic::P6,
    ];

    /// Magic number for the given kind and encoding.
    pub fn new(kind: ImageKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (ImageKind::Bitmap, Encoding::Ascii) => Magic::P1,
            (ImageKind::Greymap, Encoding::Ascii) => Magic::P2,
            (ImageKind::Pixmap, Encoding::Ascii) => Magic::P3,
            (ImageKind::Bitmap, Encoding::Binary) => Magic::P4,
            (ImageKind::Greymap, Encoding::Binary) => Magic::P5,
            (ImageKind::Pixmap, Encoding::Binary) => Magic::P6,
        }
    }

    /// Parse a two-byte magic token such as `b"P5"`.
    ///
    /// Returns `None` for anything other than the six recognized tokens.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Magic::P1),
            b"P2" => Some(Magic::P2),
            b"P3" => Some(Magic::P3),
            b"P4" => Some(Magic::P4),
            b"P5" => Some(Magic::P5),
            b"P6" => Some(Magic::P6),
            _ => None,
        }
    }

    /// The image kind this magic number encodes.
    pub fn kind(self) -> ImageKind {
        match self {
            Magic::P1 | Magic::P4 => ImageKind::Bitmap,
            Magic::P2 | Magic::P5 => ImageKind::Greymap,
            Magic::P3 | Magic::P6 => ImageKind::Pixmap,
        }
    }

    /// The payload layout this magic number encodes.
    pub fn encoding(self) -> Encoding {
        match self {
            Magic::P1 | Magic::P2 | Magic::P3 => Encoding::Ascii,
            Magic::P4 | Magic::P5 | Magic::P6 => Encoding::Binary,
        }
    }

    /// The token as written in a file header.
    pub fn as_str(self) -> &'static str {
        match self {
            Magic::P1 => "P1",
            Magic::P2 => "P2",
            Magic::P3 => "P3",
            Magic::P4 => "P4",
            Magic::P5 => "P5",
            Magic::P6 => "P6",
        }
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raster - main image container
///
/// # Examples
///
/// ```
/// use netpbm_core::{Encoding, Greymap};
///
/// let grey = Greymap::new(4, 3, 255, Encoding::Binary).unwrap();
/// assert_eq!(grey.size(), (4, 3));
/// assert_eq!(grey.max(), Some(255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<S: Sample> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Maximum sample value (always 1 for bitmaps)
    max: u8,
    /// Payload layout used when encoding
    encoding: Encoding,
    /// Row-major samples, `width * height` long
    data: Vec<S>,
}

/// 1-bit raster (PBM)
pub type Bitmap = Raster<bool>;
/// Intensity raster (PGM)
pub type Greymap = Raster<u8>;
/// RGB raster (PPM)
pub type Pixmap = Raster<Rgb>;

impl<S: Sample> Raster<S> {
    /// Create a new raster filled with the default sample
    /// (unset, zero intensity, or black).
    ///
    /// `max` is ignored for bitmaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxValue`] if `max` is 0 for a greymap or
    /// pixmap, and [`Error::InvalidDimension`] if `width * height`
    /// overflows.
    pub fn new(width: u32, height: u32, max: u8, encoding: Encoding) -> Result<Self> {
        let max = Self::validate_max(max)?;
        let len = Self::sample_count(width, height)?;
        Ok(Raster {
            width,
            height,
            max,
            encoding,
            data: vec![S::default(); len],
        })
    }

    /// Create a raster from a row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len() != width * height` and
    /// [`Error::SampleOutOfRange`] for the first sample above `max`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        max: u8,
        encoding: Encoding,
        data: Vec<S>,
    ) -> Result<Self> {
        let max = Self::validate_max(max)?;
        let expected = Self::sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        if let Some(i) = data.iter().position(|s| !s.fits(max)) {
            return Err(Error::SampleOutOfRange {
                x: (i % width as usize) as u32,
                y: (i / width as usize) as u32,
                max,
            });
        }
        Ok(Raster {
            width,
            height,
            max,
            encoding,
            data,
        })
    }

    /// Create a raster of the given size sharing this raster's kind,
    /// maximum value and encoding, filled with the default sample.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `usize`.
    pub fn create_template(&self, width: u32, height: u32) -> Self {
        let len = Self::sample_count(width, height).unwrap_or_else(|_| {
            panic!("raster too large: {}x{} samples", width, height);
        });
        Raster {
            width,
            height,
            max: self.max,
            encoding: self.encoding,
            data: vec![S::default(); len],
        }
    }

    fn validate_max(max: u8) -> Result<u8> {
        if !S::KIND.has_max() {
            return Ok(1);
        }
        if max == 0 {
            return Err(Error::InvalidMaxValue(0));
        }
        Ok(max)
    }

    fn sample_count(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raster kind.
    #[inline]
    pub fn kind(&self) -> ImageKind {
        S::KIND
    }

    /// Get the maximum sample value, `None` for bitmaps.
    #[inline]
    pub fn max(&self) -> Option<u8> {
        S::KIND.has_max().then_some(self.max)
    }

    /// Maximum sample value used for range checks (1 for bitmaps).
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.max
    }

    /// Get the payload encoding.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Set the payload encoding used by the next encode.
    #[inline]
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Return the raster with a different payload encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Get the magic number this raster encodes as.
    #[inline]
    pub fn magic(&self) -> Magic {
        Magic::new(S::KIND, self.encoding)
    }

    /// All samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[S] {
        &self.data
    }

    /// Consume the raster and return its row-major samples.
    pub fn into_pixels(self) -> Vec<S> {
        self.data
    }

    /// Get row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[S] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterate over the rows from top to bottom.
    ///
    /// Yields exactly `height` slices of `width` samples each, including for
    /// zero-width rasters.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[S]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Set every pixel to `value`, clamped to the raster's maximum.
    pub fn fill(&mut self, value: S) {
        let value = value.clamped(self.max);
        self.data.fill(value);
    }

    /// Mirror the raster horizontally by reversing every row in place.
    pub fn flip(&mut self) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Mirror the raster vertically by reversing the row order in place.
    pub fn flop(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        for y in 0..h / 2 {
            let (top, bottom) = self.data.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Replace every sample with its negative relative to `max`.
    pub fn invert(&mut self) {
        let max = self.max;
        for s in &mut self.data {
            *s = s.inverted(max);
        }
    }
}
