//! PNM (Portable Any Map) codec
//!
//! Reads and writes all six Netpbm encodings:
//!
//! | kind    | ASCII | binary |
//! |---------|-------|--------|
//! | bitmap  | P1    | P4     |
//! | greymap | P2    | P5     |
//! | pixmap  | P3    | P6     |
//!
//! Each sample kind owns its payload layout through [`PnmSample`]; the
//! header grammar and the ASCII/binary split are shared.
//!
//! The binary payload is taken as the trailing `N` bytes of the input,
//! where `N` is the exact size the header implies. Input shorter than the
//! header plus `N` bytes is rejected as truncated.
//!
//! # See also
//!
//! Netpbm: `pbm(5)`, `pgm(5)`, `ppm(5)`

use crate::header::{PnmHeader, read_header};
use crate::{IoError, IoResult};
use log::{debug, warn};
use netpbm_core::{Encoding, ImageKind, Raster, Rgb, Sample};
use std::io::Write as _;

/// How decoded samples above the header's maximum are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRange {
    /// Fail with [`IoError::InvalidSample`]
    #[default]
    Reject,
    /// Clamp the sample to the maximum and log a warning
    Clamp,
}

/// Options for decoding PNM data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Policy for samples above the declared maximum
    pub out_of_range: SampleRange,
}

impl ReadOptions {
    /// Set the out-of-range sample policy
    pub fn out_of_range(mut self, policy: SampleRange) -> Self {
        self.out_of_range = policy;
        self
    }
}

/// A sample kind with a Netpbm payload layout.
pub trait PnmSample: Sample {
    /// ASCII tokens per pixel.
    const CHANNELS: usize;

    /// Build a sample from `CHANNELS` range-checked channel values.
    fn from_channels(channels: &[u8]) -> Self;

    /// Append the ASCII tokens of this sample, space-separated.
    fn write_ascii(self, out: &mut String);

    /// Bytes per binary row of `width` pixels.
    fn binary_row_len(width: usize) -> usize;

    /// Unpack one binary row of `width` pixels.
    fn read_row(bytes: &[u8], width: usize, out: &mut Vec<Self>);

    /// Pack one row of samples.
    fn write_row(row: &[Self], out: &mut Vec<u8>);
}

impl PnmSample for bool {
    const CHANNELS: usize = 1;

    fn from_channels(channels: &[u8]) -> Self {
        channels[0] != 0
    }

    fn write_ascii(self, out: &mut String) {
        out.push(if self { '1' } else { '0' });
    }

    fn binary_row_len(width: usize) -> usize {
        width.div_ceil(8)
    }

    fn read_row(bytes: &[u8], width: usize, out: &mut Vec<Self>) {
        out.extend((0..width).map(|x| (bytes[x / 8] >> (7 - x % 8)) & 1 != 0));
    }

    fn write_row(row: &[Self], out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + Self::binary_row_len(row.len()), 0);
        for (x, _) in row.iter().enumerate().filter(|(_, set)| **set) {
            out[start + x / 8] |= 0x80 >> (x % 8);
        }
    }
}

impl PnmSample for u8 {
    const CHANNELS: usize = 1;

    fn from_channels(channels: &[u8]) -> Self {
        channels[0]
    }

    fn write_ascii(self, out: &mut String) {
        out.push_str(&self.to_string());
    }

    fn binary_row_len(width: usize) -> usize {
        width
    }

    fn read_row(bytes: &[u8], _width: usize, out: &mut Vec<Self>) {
        out.extend_from_slice(bytes);
    }

    fn write_row(row: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(row);
    }
}

impl PnmSample for Rgb {
    const CHANNELS: usize = 3;

    fn from_channels(channels: &[u8]) -> Self {
        Rgb::new(channels[0], channels[1], channels[2])
    }

    fn write_ascii(self, out: &mut String) {
        out.push_str(&format!("{} {} {}", self.r, self.g, self.b));
    }

    fn binary_row_len(width: usize) -> usize {
        width * 3
    }

    fn read_row(bytes: &[u8], _width: usize, out: &mut Vec<Self>) {
        out.extend(
            bytes
                .chunks_exact(3)
                .map(|c| Rgb::new(c[0], c[1], c[2])),
        );
    }

    fn write_row(row: &[Self], out: &mut Vec<u8>) {
        for p in row {
            out.extend_from_slice(&p.channels());
        }
    }
}

/// Decode PNM data of a known kind with default options.
///
/// # Errors
///
/// Any header error from [`read_header`], [`IoError::KindMismatch`] when
/// the magic names a different kind, [`IoError::TruncatedPayload`] and
/// [`IoError::InvalidSample`] for bad pixel data.
pub fn decode<S: PnmSample>(data: &[u8]) -> IoResult<Raster<S>> {
    decode_with(data, &ReadOptions::default())
}

/// Decode PNM data of a known kind.
pub fn decode_with<S: PnmSample>(data: &[u8], options: &ReadOptions) -> IoResult<Raster<S>> {
    let header = read_header(data)?;
    decode_payload(data, &header, options)
}

pub(crate) fn decode_payload<S: PnmSample>(
    data: &[u8],
    header: &PnmHeader,
    options: &ReadOptions,
) -> IoResult<Raster<S>> {
    if header.magic.kind() != S::KIND {
        return Err(IoError::KindMismatch {
            expected: S::KIND,
            found: header.magic,
        });
    }

    let max = header.max.unwrap_or(1);
    let encoding = header.magic.encoding();
    let pixels = match encoding {
        Encoding::Ascii => decode_ascii::<S>(&data[header.payload_offset..], header, options)?,
        Encoding::Binary => decode_binary::<S>(data, header, options)?,
    };

    Ok(Raster::from_pixels(
        header.width,
        header.height,
        max,
        encoding,
        pixels,
    )?)
}

fn decode_ascii<S: PnmSample>(
    payload: &[u8],
    header: &PnmHeader,
    options: &ReadOptions,
) -> IoResult<Vec<S>> {
    let expected = header.ascii_token_count()?;
    let tokens: Vec<&[u8]> = payload
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .take(expected)
        .collect();
    if tokens.len() < expected {
        return Err(IoError::TruncatedPayload {
            expected,
            available: tokens.len(),
            unit: "tokens",
        });
    }
    debug!("{}: {} ascii tokens", header.magic, expected);

    let width = header.width as usize;
    let max = header.max.unwrap_or(1);
    let mut clamped = 0usize;
    let mut channels = [0u8; 3];
    let mut pixels = Vec::with_capacity(expected / S::CHANNELS);

    for (i, pixel_tokens) in tokens.chunks_exact(S::CHANNELS).enumerate() {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        for (c, token) in pixel_tokens.iter().enumerate() {
            let value = parse_token(token, x, y)?;
            channels[c] = check_channel::<S>(value, max, options, x, y, &mut clamped)?;
        }
        pixels.push(S::from_channels(&channels[..S::CHANNELS]));
    }

    if clamped > 0 {
        warn!("{}: clamped {} samples to maximum {}", header.magic, clamped, max);
    }
    Ok(pixels)
}

fn parse_token(token: &[u8], x: u32, y: u32) -> IoResult<u32> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| IoError::InvalidSample {
            x,
            y,
            reason: format!(
                "{:?} is not a decimal integer",
                String::from_utf8_lossy(token)
            ),
        })
}

fn check_channel<S: PnmSample>(
    value: u32,
    max: u8,
    options: &ReadOptions,
    x: u32,
    y: u32,
    clamped: &mut usize,
) -> IoResult<u8> {
    if S::KIND == ImageKind::Bitmap {
        return match value {
            0 | 1 => Ok(value as u8),
            _ => Err(IoError::InvalidSample {
                x,
                y,
                reason: format!("bitmap token must be 0 or 1, found {}", value),
            }),
        };
    }
    if value <= max as u32 {
        return Ok(value as u8);
    }
    match options.out_of_range {
        SampleRange::Reject => Err(IoError::InvalidSample {
            x,
            y,
            reason: format!("value {} exceeds maximum {}", value, max),
        }),
        SampleRange::Clamp => {
            *clamped += 1;
            Ok(max)
        }
    }
}

fn decode_binary<S: PnmSample>(
    data: &[u8],
    header: &PnmHeader,
    options: &ReadOptions,
) -> IoResult<Vec<S>> {
    let expected = header.binary_payload_len()?;
    let available = data.len() - header.payload_offset;
    if available < expected {
        return Err(IoError::TruncatedPayload {
            expected,
            available,
            unit: "bytes",
        });
    }
    if available > expected {
        debug!(
            "{}: ignoring {} bytes before the payload",
            header.magic,
            available - expected
        );
    }

    let payload = &data[data.len() - expected..];
    let width = header.width as usize;
    let row_len = S::binary_row_len(width);
    let mut pixels = Vec::with_capacity(width * header.height as usize);
    if row_len > 0 {
        for row in payload.chunks_exact(row_len) {
            S::read_row(row, width, &mut pixels);
        }
    }

    let max = header.max.unwrap_or(1);
    let mut clamped = 0usize;
    for (i, p) in pixels.iter_mut().enumerate() {
        if p.fits(max) {
            continue;
        }
        match options.out_of_range {
            SampleRange::Reject => {
                return Err(IoError::InvalidSample {
                    x: (i % width) as u32,
                    y: (i / width) as u32,
                    reason: format!("{:?} exceeds maximum {}", p, max),
                });
            }
            SampleRange::Clamp => {
                *p = p.clamped(max);
                clamped += 1;
            }
        }
    }
    if clamped > 0 {
        warn!("{}: clamped {} samples to maximum {}", header.magic, clamped, max);
    }
    Ok(pixels)
}

/// Encode a raster in the layout named by its encoding.
///
/// The header is the magic, `"{width} {height}"` and, for greymaps and
/// pixmaps, the maximum value, each on its own line. ASCII rows hold
/// space-separated values, are separated by newlines and have no trailing
/// newline after the last row. Binary rows are raw bytes; bitmap rows are
/// packed MSB-first and padded to whole bytes.
pub fn encode<S: PnmSample>(raster: &Raster<S>) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    writeln!(out, "{}", raster.magic())?;
    writeln!(out, "{} {}", raster.width(), raster.height())?;
    if let Some(max) = raster.max() {
        writeln!(out, "{}", max)?;
    }

    match raster.encoding() {
        Encoding::Ascii => {
            let mut text = String::new();
            for (y, row) in raster.rows().enumerate() {
                if y > 0 {
                    text.push('\n');
                }
                for (x, &s) in row.iter().enumerate() {
                    if x > 0 {
                        text.push(' ');
                    }
                    s.write_ascii(&mut text);
                }
            }
            out.extend_from_slice(text.as_bytes());
        }
        Encoding::Binary => {
            out.reserve(S::binary_row_len(raster.width() as usize) * raster.height() as usize);
            for row in raster.rows() {
                S::write_row(row, &mut out);
            }
        }
    }

    debug!(
        "encoded {} {}x{} into {} bytes",
        raster.magic(),
        raster.width(),
        raster.height(),
        out.len()
    );
    Ok(out)
}
