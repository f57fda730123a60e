//! PNM header parsing
//!
//! A Netpbm header is a sequence of whitespace-separated tokens: the magic
//! number, the width, the height and, for greymaps and pixmaps, the
//! maximum sample value. A `#` between tokens starts a comment running to
//! the end of the line. Blank lines are plain whitespace.
//!
//! [`read_header`] extracts this metadata without decoding pixel data.

use crate::{IoError, IoResult};
use log::debug;
use netpbm_core::{ImageKind, Magic};

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Magic number (format tag)
    pub magic: Magic,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum sample value, `None` for bitmaps
    pub max: Option<u8>,
    /// Byte offset just past the whitespace that ends the header
    pub payload_offset: usize,
}

impl PnmHeader {
    /// Exact size in bytes of the binary payload this header describes.
    ///
    /// Bitmap rows are padded to whole bytes; greymaps use one byte per
    /// pixel and pixmaps three.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MalformedHeader`] if the size overflows `usize`.
    pub fn binary_payload_len(&self) -> IoResult<usize> {
        let w = self.width as usize;
        let row = match self.magic.kind() {
            ImageKind::Bitmap => w.div_ceil(8),
            ImageKind::Greymap => w,
            ImageKind::Pixmap => w.checked_mul(3).ok_or_else(|| self.too_large())?,
        };
        row.checked_mul(self.height as usize)
            .ok_or_else(|| self.too_large())
    }

    /// Number of ASCII tokens the payload this header describes must hold.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MalformedHeader`] if the count overflows `usize`.
    pub fn ascii_token_count(&self) -> IoResult<usize> {
        let per_pixel = match self.magic.kind() {
            ImageKind::Bitmap | ImageKind::Greymap => 1,
            ImageKind::Pixmap => 3,
        };
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(per_pixel))
            .ok_or_else(|| self.too_large())
    }

    fn too_large(&self) -> IoError {
        IoError::MalformedHeader(format!(
            "dimensions {}x{} are too large",
            self.width, self.height
        ))
    }
}

/// Whitespace/comment-aware token reader over a byte buffer.
pub(crate) struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset (just past the last token returned).
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Next token, skipping whitespace and `#` comments.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        let data = self.data;
        loop {
            while self.pos < data.len() && data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < data.len() && data[self.pos] == b'#' {
                while self.pos < data.len() && data[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            break;
        }
        if self.pos >= data.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < data.len()
            && !data[self.pos].is_ascii_whitespace()
            && data[self.pos] != b'#'
        {
            self.pos += 1;
        }
        Some(&data[start..self.pos])
    }
}

fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

fn parse_field(token: Option<&[u8]>, name: &str) -> IoResult<u32> {
    let token = token.ok_or_else(|| IoError::MalformedHeader(format!("missing {}", name)))?;
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            IoError::MalformedHeader(format!(
                "{} is not a non-negative integer: {:?}",
                name,
                lossy(token)
            ))
        })
}

pub(crate) fn read_magic(tokens: &mut Tokenizer<'_>) -> IoResult<Magic> {
    let token = tokens
        .next_token()
        .ok_or_else(|| IoError::MalformedHeader("missing magic number".to_string()))?;
    Magic::from_token(token).ok_or_else(|| IoError::UnsupportedMagic(lossy(token)))
}

/// Read the PNM header from the start of `data`.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedMagic`] for an unknown magic number and
/// [`IoError::MalformedHeader`] when the width, height or maximum value is
/// missing or not a number, or when the maximum value is outside
/// `1..=255`.
pub fn read_header(data: &[u8]) -> IoResult<PnmHeader> {
    let mut tokens = Tokenizer::new(data);
    let magic = read_magic(&mut tokens)?;
    let width = parse_field(tokens.next_token(), "width")?;
    let height = parse_field(tokens.next_token(), "height")?;

    let max = if magic.kind().has_max() {
        let max = parse_field(tokens.next_token(), "maximum value")?;
        if max == 0 || max > u8::MAX as u32 {
            return Err(IoError::MalformedHeader(format!(
                "maximum value {} outside 1..=255",
                max
            )));
        }
        Some(max as u8)
    } else {
        None
    };

    // Exactly one whitespace byte separates the header from the payload.
    let mut payload_offset = tokens.position();
    if payload_offset < data.len() && data[payload_offset].is_ascii_whitespace() {
        payload_offset += 1;
    }

    debug!(
        "pnm header: {} {}x{} max={:?} payload@{}",
        magic, width, height, max, payload_offset
    );

    Ok(PnmHeader {
        magic,
        width,
        height,
        max,
        payload_offset,
    })
}
