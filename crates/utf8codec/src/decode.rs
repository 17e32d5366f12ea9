use alloc::vec::Vec;
use core::iter::FusedIterator;

use bstr::BStr;
use log::trace;

use crate::{
    CodecError, DecodeError, EncodingUnit,
    classify::{CONTINUATION_BITS, CONTINUATION_MASK},
    length_for_leading_octet,
    validate::split,
};

/// Decodes a unit back into the code point it encodes.
///
/// The unit is validated first. A structurally sound unit is still rejected
/// if it decodes to something RFC 3629 forbids: an overlong form, a
/// surrogate, or a value above [`MAX_CODE_POINT`](crate::MAX_CODE_POINT).
///
/// # Errors
///
/// Any [`validate`](crate::validate) error, [`CodecError::Overlong`], or
/// [`CodecError::RangeInvalid`].
pub fn decode(unit: &EncodingUnit) -> Result<char, CodecError> {
    let (class, first, continuation) = split(unit)?;

    let mut code_point = 0u32;
    let mut shift = 0;
    for &octet in continuation.iter().rev() {
        code_point |= u32::from(octet & CONTINUATION_MASK) << shift;
        shift += CONTINUATION_BITS;
    }
    code_point |= u32::from(first & class.payload_mask) << shift;

    if code_point < class.min {
        return Err(CodecError::Overlong {
            code_point,
            len: unit.len(),
        });
    }
    char::from_u32(code_point).ok_or(CodecError::RangeInvalid(code_point))
}

/// Decodes a whole buffer, all or nothing.
///
/// ```rust
/// use utf8codec::decode_buffer;
///
/// assert_eq!(decode_buffer(b"A\xE2\x82\xAC"), Ok(vec!['A', '€']));
/// assert!(decode_buffer(b"A\xE2").is_err());
/// ```
///
/// # Errors
///
/// The first failure, with the byte offset of the unit that caused it. No
/// partial output is returned.
pub fn decode_buffer(bytes: &[u8]) -> Result<Vec<char>, DecodeError> {
    Decoder::new(bytes).collect()
}

/// Iterator over the code points of a byte buffer.
///
/// Yields one `Ok(char)` per unit, left to right. On the first malformed
/// unit it yields a single `Err` and then stops; malformed input is never
/// skipped.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Starts decoding at the beginning of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unit to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn step(&self) -> Option<Result<(char, usize), CodecError>> {
        let rest = self.bytes.get(self.offset..)?;
        let &first = rest.first()?;

        let len = length_for_leading_octet(first);
        if len == 0 {
            return Some(Err(CodecError::MalformedPrefix(first)));
        }
        let Some(candidate) = rest.get(..len) else {
            return Some(Err(CodecError::TruncatedSequence {
                needed: len,
                available: rest.len(),
            }));
        };

        trace!("decoding {:?} at offset {}", BStr::new(candidate), self.offset);
        Some(decode(&EncodingUnit::from_bytes(candidate)).map(|c| (c, len)))
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.step()? {
            Ok((c, len)) => {
                self.offset += len;
                Some(Ok(c))
            }
            Err(source) => {
                self.failed = true;
                Some(Err(DecodeError {
                    source,
                    offset: self.offset,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // A malformed unit ends iteration after one item, so only one item is
        // guaranteed while bytes remain.
        let remaining = self.bytes.len() - self.offset;
        (remaining.min(1), Some(remaining))
    }
}

impl FusedIterator for Decoder<'_> {}
