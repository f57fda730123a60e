//! I/O error types
//!
//! Provides a unified error type for all Netpbm decode and encode
//! operations. Header, payload and byte-source failures each map to their
//! own variant so that callers can tell a truncated file from a corrupt one.

use netpbm_core::{ImageKind, Magic};
use thiserror::Error;

/// Error type for Netpbm I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The byte source or sink failed (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required header token is missing, non-numeric or out of range
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The magic token is not one of `P1`..`P6`
    #[error("unsupported magic number: {0:?}")]
    UnsupportedMagic(String),

    /// Fewer payload units than the header promises
    /// (bytes for binary payloads, tokens for ASCII payloads)
    #[error("truncated payload: expected {expected} {unit}, found {available}")]
    TruncatedPayload {
        expected: usize,
        available: usize,
        unit: &'static str,
    },

    /// A payload value that is not a valid sample
    #[error("invalid sample at ({x}, {y}): {reason}")]
    InvalidSample { x: u32, y: u32, reason: String },

    /// A typed decode found a different image kind
    #[error("expected a {expected} but found {found}")]
    KindMismatch { expected: ImageKind, found: Magic },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
