//! Depth and kind conversions
//!
//! - [`Greymap::rescale_depth`] / [`Pixmap::rescale_depth`]: remap samples
//!   to a new maximum value
//! - [`Greymap::to_mono`] / [`Pixmap::to_mono`]: threshold to a bitmap
//! - [`Pixmap::to_grey`]: average the channels into a greymap
//!
//! Reductions allocate a fresh raster and keep the source encoding, so an
//! ASCII pixmap becomes an ASCII greymap (P3 to P2) and a binary one a
//! binary greymap (P6 to P5).

use super::{Bitmap, Greymap, Pixmap, Raster, Rgb};
use crate::error::{Error, Result};

/// Multiplier applied by [`Greymap::rescale_depth`] before dividing by the
/// old maximum.
pub const GREY_RESCALE_FACTOR: u32 = 5;

fn check_new_max(new_max: u8) -> Result<()> {
    if new_max == 0 {
        return Err(Error::InvalidMaxValue(0));
    }
    Ok(())
}

impl Greymap {
    /// Remap every sample for a new maximum value.
    ///
    /// Each sample becomes `value * 5 / old_max` (integer division), limited
    /// to `new_max`; the multiplier is fixed and does not depend on
    /// `new_max`. Use [`Greymap::rescale_depth_linear`] for a proportional
    /// remap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxValue`] if `new_max` is 0.
    pub fn rescale_depth(&mut self, new_max: u8) -> Result<()> {
        check_new_max(new_max)?;
        let old_max = self.max as u32;
        for v in &mut self.data {
            let scaled = *v as u32 * GREY_RESCALE_FACTOR / old_max;
            *v = scaled.min(new_max as u32) as u8;
        }
        self.max = new_max;
        Ok(())
    }

    /// Remap every sample proportionally: `round(value * new_max / old_max)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxValue`] if `new_max` is 0.
    pub fn rescale_depth_linear(&mut self, new_max: u8) -> Result<()> {
        check_new_max(new_max)?;
        let old_max = self.max as u32;
        let new = new_max as u32;
        for v in &mut self.data {
            *v = ((*v as u32 * new + old_max / 2) / old_max) as u8;
        }
        self.max = new_max;
        Ok(())
    }

    /// Threshold to a bitmap.
    ///
    /// A pixel is set (foreground) when its value is strictly below
    /// `max / 2` (integer division), i.e. darker than half intensity.
    pub fn to_mono(&self) -> Bitmap {
        let threshold = self.max / 2;
        Raster {
            width: self.width,
            height: self.height,
            max: 1,
            encoding: self.encoding,
            data: self.data.iter().map(|&v| v < threshold).collect(),
        }
    }
}

impl Pixmap {
    /// Linearly remap every channel for a new maximum value:
    /// `value * new_max / old_max`, truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxValue`] if `new_max` is 0.
    pub fn rescale_depth(&mut self, new_max: u8) -> Result<()> {
        check_new_max(new_max)?;
        let old_max = self.max as u32;
        let new = new_max as u32;
        for px in &mut self.data {
            *px = px.map(|c| (c as u32 * new / old_max) as u8);
        }
        self.max = new_max;
        Ok(())
    }

    /// Threshold to a bitmap using the truncated channel mean.
    ///
    /// A pixel is set when `mean(r, g, b) < max / 2`.
    pub fn to_mono(&self) -> Bitmap {
        let threshold = self.max / 2;
        Raster {
            width: self.width,
            height: self.height,
            max: 1,
            encoding: self.encoding,
            data: self.data.iter().map(|px| px.mean() < threshold).collect(),
        }
    }

    /// Reduce to a greymap holding the truncated channel mean.
    ///
    /// The maximum value carries over unchanged.
    pub fn to_grey(&self) -> Greymap {
        Raster {
            width: self.width,
            height: self.height,
            max: self.max,
            encoding: self.encoding,
            data: self.data.iter().map(|px| Rgb::mean(*px)).collect(),
        }
    }
}
