//! Error types for array-message encoding and decoding.

use std::fmt;

use thiserror::Error;

use crate::element::ElementKind;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding array messages.
///
/// All errors are surfaced to the immediate caller; the codec never
/// retries and never produces partial output on failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bytes remain in the input than the decoder needs.
    #[error("truncated buffer: needed {needed} bytes, {available} available")]
    TruncatedBuffer {
        /// Bytes the decoder needed to make progress.
        needed: usize,
        /// Bytes actually remaining.
        available: usize,
    },

    /// The destination buffer lacks capacity for the encoded output.
    #[error("buffer too small: needed {needed} bytes, capacity {capacity}")]
    BufferTooSmall {
        /// Bytes the encoder needed to write.
        needed: usize,
        /// Capacity actually remaining.
        capacity: usize,
    },

    /// A value cannot be represented in the target width.
    #[error("value {value} out of range for {target}")]
    ValueOutOfRange {
        /// The offending value.
        value: String,
        /// The type it could not be represented in.
        target: String,
    },

    /// Bytes remain after the declared end of a message (strict decode).
    #[error("{trailing} trailing bytes after message end")]
    TrailingData {
        /// Number of unconsumed bytes.
        trailing: usize,
    },

    /// Element kind of the values does not match the schema.
    #[error("element kind mismatch: schema expects {expected}, values are {actual}")]
    SchemaMismatch {
        /// Kind declared by the schema.
        expected: ElementKind,
        /// Kind of the supplied values.
        actual: ElementKind,
    },
}

/// Helper to build `ValueOutOfRange` errors.
#[must_use]
pub fn out_of_range(value: impl fmt::Display, target: impl fmt::Display) -> Error {
    Error::ValueOutOfRange {
        value: value.to_string(),
        target: target.to_string(),
    }
}
