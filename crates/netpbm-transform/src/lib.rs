//! netpbm-transform - Geometric transformations for Netpbm rasters
//!
//! This crate provides geometric transformation operations including:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips
//! - Nearest-neighbour resampling to an exact size or by a factor
//!
//! Every function is generic over the sample kind and returns a new raster
//! that keeps the source's maximum value and encoding. None of them can
//! fail.

pub mod rotate;
pub mod scale;

pub use rotate::{flip_lr, flip_tb, rotate_90, rotate_180, rotate_180_in_place, rotate_orth};
pub use scale::{resample, scale_by_sampling, scale_to_size};
