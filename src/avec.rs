//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a whole location reference at once,
//! from a byte slice or from base64 text.

pub mod slice;
#[cfg(feature = "base64")]
pub mod text;

pub use slice::decode as decode_binary;
#[cfg(feature = "base64")]
pub use text::decode as decode_base64;

use thiserror::Error;

use crate::sans::header::{HeaderError, MIN_LINE_SIZE};

/// Errors occurring while decoding a location reference.
#[derive(Debug, Error)]
pub enum Error {
    /// Unsupported version of the binary format.
    #[error("Unsupported version ({0}), only version 3 is supported.")]
    UnsupportedVersion(u8),
    /// Location type not decoded by this crate.
    #[error("Unsupported location type ({0}).")]
    UnsupportedLocationType(u8),
    /// The input ended before the reference was complete.
    #[error("Truncated input: needed {needed} bytes, found {size}.")]
    TruncatedInput { needed: usize, size: usize },
    /// The text is not valid base64.
    ///
    /// _Requires Cargo feature `base64`._
    #[cfg(feature = "base64")]
    #[error("Invalid transport encoding: {0}.")]
    InvalidTransportEncoding(base64::DecodeError),
}

impl From<HeaderError> for Error {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::UnsupportedVersion(version) => Self::UnsupportedVersion(version),
            HeaderError::UnsupportedLocationType(tag) => Self::UnsupportedLocationType(tag),
            HeaderError::IncompleteLine(size) => Self::TruncatedInput {
                needed: MIN_LINE_SIZE,
                size,
            },
        }
    }
}

#[cfg(feature = "base64")]
impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidTransportEncoding(err)
    }
}
