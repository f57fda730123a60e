//! netpbm-io - Netpbm image I/O
//!
//! Decodes and encodes the six Netpbm encodings (P1..P6) between byte
//! buffers and [`netpbm_core::Raster`]s. Typed entry points ([`decode`],
//! [`encode`]) work on a known sample kind; [`decode_any`] sniffs the magic
//! number and returns an [`AnyRaster`].
//!
//! Byte sources and sinks are the caller's concern: the reader/writer and
//! path helpers only move whole buffers in and out before handing them to
//! the codec.

mod error;
pub mod format;
pub mod header;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_magic, detect_magic_from_bytes};
pub use header::{PnmHeader, read_header};
pub use pnm::{PnmSample, ReadOptions, SampleRange, decode, decode_with, encode};

use log::debug;
use netpbm_core::{Bitmap, Greymap, ImageKind, Magic, Pixmap, Raster};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A raster of any of the three kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyRaster {
    Bitmap(Bitmap),
    Greymap(Greymap),
    Pixmap(Pixmap),
}

impl AnyRaster {
    /// Get the raster kind.
    pub fn kind(&self) -> ImageKind {
        match self {
            AnyRaster::Bitmap(_) => ImageKind::Bitmap,
            AnyRaster::Greymap(_) => ImageKind::Greymap,
            AnyRaster::Pixmap(_) => ImageKind::Pixmap,
        }
    }

    /// Get the magic number the raster encodes as.
    pub fn magic(&self) -> Magic {
        match self {
            AnyRaster::Bitmap(r) => r.magic(),
            AnyRaster::Greymap(r) => r.magic(),
            AnyRaster::Pixmap(r) => r.magic(),
        }
    }

    /// Get `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        match self {
            AnyRaster::Bitmap(r) => r.size(),
            AnyRaster::Greymap(r) => r.size(),
            AnyRaster::Pixmap(r) => r.size(),
        }
    }

    /// Get the maximum sample value, `None` for bitmaps.
    pub fn max(&self) -> Option<u8> {
        match self {
            AnyRaster::Bitmap(r) => r.max(),
            AnyRaster::Greymap(r) => r.max(),
            AnyRaster::Pixmap(r) => r.max(),
        }
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            AnyRaster::Bitmap(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_greymap(&self) -> Option<&Greymap> {
        match self {
            AnyRaster::Greymap(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            AnyRaster::Pixmap(r) => Some(r),
            _ => None,
        }
    }

    /// Convert into a bitmap, or fail with [`IoError::KindMismatch`].
    pub fn into_bitmap(self) -> IoResult<Bitmap> {
        match self {
            AnyRaster::Bitmap(r) => Ok(r),
            other => Err(other.mismatch(ImageKind::Bitmap)),
        }
    }

    /// Convert into a greymap, or fail with [`IoError::KindMismatch`].
    pub fn into_greymap(self) -> IoResult<Greymap> {
        match self {
            AnyRaster::Greymap(r) => Ok(r),
            other => Err(other.mismatch(ImageKind::Greymap)),
        }
    }

    /// Convert into a pixmap, or fail with [`IoError::KindMismatch`].
    pub fn into_pixmap(self) -> IoResult<Pixmap> {
        match self {
            AnyRaster::Pixmap(r) => Ok(r),
            other => Err(other.mismatch(ImageKind::Pixmap)),
        }
    }

    fn mismatch(&self, expected: ImageKind) -> IoError {
        IoError::KindMismatch {
            expected,
            found: self.magic(),
        }
    }
}

impl From<Bitmap> for AnyRaster {
    fn from(r: Bitmap) -> Self {
        AnyRaster::Bitmap(r)
    }
}

impl From<Greymap> for AnyRaster {
    fn from(r: Greymap) -> Self {
        AnyRaster::Greymap(r)
    }
}

impl From<Pixmap> for AnyRaster {
    fn from(r: Pixmap) -> Self {
        AnyRaster::Pixmap(r)
    }
}

/// Decode PNM data of any kind, chosen by its magic number.
pub fn decode_any(data: &[u8]) -> IoResult<AnyRaster> {
    decode_any_with(data, &ReadOptions::default())
}

/// Decode PNM data of any kind with explicit options.
pub fn decode_any_with(data: &[u8], options: &ReadOptions) -> IoResult<AnyRaster> {
    let header = read_header(data)?;
    Ok(match header.magic.kind() {
        ImageKind::Bitmap => AnyRaster::Bitmap(pnm::decode_payload(data, &header, options)?),
        ImageKind::Greymap => AnyRaster::Greymap(pnm::decode_payload(data, &header, options)?),
        ImageKind::Pixmap => AnyRaster::Pixmap(pnm::decode_payload(data, &header, options)?),
    })
}

/// Encode a raster of any kind.
pub fn encode_any(raster: &AnyRaster) -> IoResult<Vec<u8>> {
    match raster {
        AnyRaster::Bitmap(r) => encode(r),
        AnyRaster::Greymap(r) => encode(r),
        AnyRaster::Pixmap(r) => encode(r),
    }
}

fn read_all<R: Read>(mut reader: R) -> IoResult<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;
    Ok(data)
}

/// Read a PNM image of any kind from a reader.
pub fn read_pnm<R: Read>(reader: R) -> IoResult<AnyRaster> {
    decode_any(&read_all(reader)?)
}

/// Read a bitmap (P1/P4) from a reader.
pub fn read_pbm<R: Read>(reader: R) -> IoResult<Bitmap> {
    decode(&read_all(reader)?)
}

/// Read a greymap (P2/P5) from a reader.
pub fn read_pgm<R: Read>(reader: R) -> IoResult<Greymap> {
    decode(&read_all(reader)?)
}

/// Read a pixmap (P3/P6) from a reader.
pub fn read_ppm<R: Read>(reader: R) -> IoResult<Pixmap> {
    decode(&read_all(reader)?)
}

/// Write a raster to a writer in the layout named by its encoding.
pub fn write_pnm<S: PnmSample, W: Write>(raster: &Raster<S>, mut writer: W) -> IoResult<()> {
    let data = encode(raster)?;
    writer.write_all(&data).map_err(IoError::Io)?;
    writer.flush().map_err(IoError::Io)?;
    Ok(())
}

/// Read an image of any kind from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<AnyRaster> {
    let path = path.as_ref();
    let file = File::open(path).map_err(IoError::Io)?;
    debug!("reading {}", path.display());
    read_pnm(BufReader::new(file))
}

/// Write a raster to a file path.
pub fn write_image<S: PnmSample, P: AsRef<Path>>(raster: &Raster<S>, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(IoError::Io)?;
    debug!("writing {} to {}", raster.magic(), path.display());
    write_pnm(raster, BufWriter::new(file))
}
