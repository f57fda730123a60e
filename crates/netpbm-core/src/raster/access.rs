//! Pixel access functions
//!
//! Low-level functions for getting and setting individual samples.
//! Checked accessors report out-of-bounds coordinates and out-of-range
//! samples; unchecked setters clamp to the raster's maximum so the depth
//! invariant holds whichever path is used.

use super::{Raster, Sample};
use crate::error::{Error, Result};

impl<S: Sample> Raster<S> {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<S> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> S {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.index(x, y)]
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::SampleOutOfRange`] if `value` exceeds the raster's
    /// maximum.
    pub fn set(&mut self, x: u32, y: u32, value: S) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if !value.fits(self.max) {
            return Err(Error::SampleOutOfRange { x, y, max: self.max });
        }
        let i = self.index(x, y);
        self.data[i] = value;
        Ok(())
    }

    /// Set the sample at (x, y) without bounds checking.
    ///
    /// `value` is clamped to the raster's maximum.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: S) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.index(x, y);
        self.data[i] = value.clamped(self.max);
    }

    /// Whether the signed coordinate lies on the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Set the sample at a signed coordinate, silently skipping points
    /// off the canvas.
    ///
    /// Returns whether the pixel was written.
    #[inline]
    pub fn put_clipped(&mut self, x: i32, y: i32, value: S) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.set_unchecked(x as u32, y as u32, value);
        true
    }
}
