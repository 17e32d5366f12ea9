use thiserror::Error;

/// Why a code point or an encoding unit was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A surrogate, or a value above `U+10FFFF`.
    #[error("code point {0:#X} is outside the Unicode scalar value range")]
    RangeInvalid(u32),
    /// The unit is the [`EncodingUnit::Invalid`](crate::EncodingUnit::Invalid) marker.
    #[error("encoding unit is invalid")]
    InvalidUnit,
    /// The leading octet announces no length, or not the unit's length.
    #[error("malformed leading octet {0:#04X}")]
    MalformedPrefix(u8),
    /// An octet after the first lacks the `10xxxxxx` pattern.
    #[error("octet {octet:#04X} at index {index} is not a continuation octet")]
    MalformedContinuation {
        /// Position within the unit, at least 1.
        index: usize,
        /// The offending octet.
        octet: u8,
    },
    /// The value fits in fewer octets than were used.
    #[error("overlong {len}-octet encoding of U+{code_point:04X}")]
    Overlong {
        /// The decoded value.
        code_point: u32,
        /// Octets used.
        len: usize,
    },
    /// The input ends inside a multi-octet sequence.
    #[error("truncated sequence: {needed} octets announced, {available} available")]
    TruncatedSequence {
        /// Length announced by the leading octet.
        needed: usize,
        /// Octets left in the input.
        available: usize,
    },
}

/// A [`CodecError`] located in a byte buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{source} at byte offset {offset}")]
pub struct DecodeError {
    pub(crate) source: CodecError,
    pub(crate) offset: usize,
}

impl DecodeError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> CodecError {
        self.source
    }

    /// Byte offset of the unit that failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Failure of a file-level [`read`](crate::read) or [`write`](crate::write).
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StreamError {
    /// The source or destination could not be opened, read or written.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    /// The source holds no bytes.
    #[error("input is empty")]
    EmptyInput,
    /// The source is larger than [`ReaderOptions::max_input_size`](crate::ReaderOptions::max_input_size).
    #[error("input of {size} bytes exceeds the {limit} byte limit")]
    SizeLimitExceeded {
        /// Reported size of the source.
        size: u64,
        /// Configured ceiling.
        limit: u64,
    },
    /// Fewer bytes were read than the source reported.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Reported size of the source.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },
    /// The source is not well-formed UTF-8.
    #[error("malformed input: {0}")]
    Malformed(#[from] DecodeError),
    /// A unit handed to the writer failed validation.
    #[error("encoding unit {index} rejected: {source}")]
    InvalidUnit {
        /// Position in the unit sequence.
        index: usize,
        /// Why it was rejected.
        source: CodecError,
    },
}
