//! Error types for codec operations.

use std::fmt;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while decoding bytes to a code point.
///
/// An incomplete sequence is not an error; it is reported as
/// [`crate::Decoded::Incomplete`] and the caller retries with more bytes.
/// These errors are not resumable: the caller should reset the state and
/// report the character as unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The conversion state was inconsistent at entry: more bytes pending
    /// than the descriptor's longest sequence. This signals a caller bug,
    /// typically a state reused across different codecs.
    StateOutOfRange { pending: usize, max_len: usize },

    /// A zero byte appeared inside a multibyte sequence.
    EmbeddedNul { offset: usize },
}

/// Errors that can occur while encoding a code point to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The conversion state shows a decode mid-sequence; encoding through
    /// the same state would corrupt both directions. Caller protocol
    /// violation; no bytes are written.
    PendingDecode { pending: usize },

    /// The output buffer cannot hold the resolved code set's sequence.
    BufferTooSmall { needed: usize, available: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateOutOfRange { pending, max_len } => {
                write!(
                    f,
                    "conversion state pending {pending} bytes, descriptor maximum is {max_len}"
                )
            }
            Self::EmbeddedNul { offset } => {
                write!(f, "zero byte at offset {offset} inside multibyte sequence")
            }
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PendingDecode { pending } => {
                write!(f, "encode attempted with {pending} decode bytes pending")
            }
            Self::BufferTooSmall { needed, available } => {
                write!(f, "output too small: need {needed} bytes, have {available}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
impl std::error::Error for EncodeError {}
