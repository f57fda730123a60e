//! netpbm - Netpbm raster library for Rust
//!
//! # Overview
//!
//! Reads, writes and manipulates the Netpbm family of raster formats:
//!
//! - Image I/O for bitmaps (P1/P4), greymaps (P2/P5) and pixmaps (P3/P6)
//! - Depth rescaling, inversion and mono/grey reductions
//! - Geometric transforms (orthogonal rotation, flips, resampling)
//! - Drawing primitives (lines, rectangles, circles, triangles, polygons)
//! - Koch and Sierpinski fractals and a procedural noise fill
//!
//! # Example
//!
//! ```
//! use netpbm::{Encoding, Pixmap, Point, Rgb};
//!
//! let mut pix = Pixmap::new(16, 16, 255, Encoding::Binary).unwrap();
//! pix.draw_line(Point::new(0, 0), Point::new(15, 15), Rgb::WHITE);
//!
//! let bytes = netpbm::io::encode(&pix).unwrap();
//! assert!(bytes.starts_with(b"P6\n16 16\n255\n"));
//!
//! let back: Pixmap = netpbm::io::decode(&bytes).unwrap();
//! assert_eq!(back, pix);
//!
//! let turned = netpbm::transform::rotate_90(&back, true);
//! assert_eq!(turned.get(0, 0), Some(Rgb::BLACK));
//! assert_eq!(turned.get(15, 0), Some(Rgb::WHITE));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use netpbm_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use netpbm_io as io;
pub use netpbm_transform as transform;
