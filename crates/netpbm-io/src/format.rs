//! Format detection
//!
//! Identifies which of the six Netpbm encodings a byte stream holds by
//! examining its magic number. Comments before the magic are skipped the
//! same way the header reader skips them.

use crate::header::{Tokenizer, read_magic};
use crate::{IoError, IoResult};
use netpbm_core::Magic;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from a file when sniffing its magic number.
const SNIFF_LEN: u64 = 512;

/// Detect the Netpbm encoding of a file.
pub fn detect_magic<P: AsRef<Path>>(path: P) -> IoResult<Magic> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut head = Vec::new();
    file.take(SNIFF_LEN)
        .read_to_end(&mut head)
        .map_err(IoError::Io)?;
    detect_magic_from_bytes(&head)
}

/// Detect the Netpbm encoding of an in-memory byte stream.
///
/// # Errors
///
/// Returns [`IoError::MalformedHeader`] if there is no token at all and
/// [`IoError::UnsupportedMagic`] if the first token is not `P1`..`P6`.
pub fn detect_magic_from_bytes(data: &[u8]) -> IoResult<Magic> {
    let mut tokens = Tokenizer::new(data);
    read_magic(&mut tokens)
}
