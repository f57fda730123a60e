//! netpbm-core - Basic data structures for Netpbm images
//!
//! This crate provides the raster model shared by the codec and transform
//! crates, plus everything that operates on a single raster in place:
//!
//! - [`Raster`] - row-major sample grid, generic over the sample kind
//!   ([`Bitmap`], [`Greymap`], [`Pixmap`])
//! - [`Magic`] / [`Encoding`] / [`ImageKind`] - the format tag
//! - [`Rgb`] / [`Point`] - colors and integer coordinates
//! - depth and kind conversions ([`raster::convert`])
//! - drawing primitives ([`raster::graphics`]), fractal curves
//!   ([`raster::fractal`]) and a procedural noise fill ([`raster::noise`])
//!
//! # See also
//!
//! Netpbm: `pbm(5)`, `pgm(5)`, `ppm(5)`

pub mod error;
pub mod point;
pub mod raster;

pub use error::{Error, Result};
pub use point::Point;
pub use raster::fractal::MAX_FRACTAL_LEVEL;
pub use raster::noise::NoiseParams;
pub use raster::{Bitmap, Encoding, Greymap, ImageKind, Magic, Pixmap, Raster, Rgb, Sample};
