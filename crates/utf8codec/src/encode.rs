use crate::{
    CodecError, EncodingUnit,
    classify::{CONTINUATION_BITS, CONTINUATION_MASK, CONTINUATION_PREFIX, LengthClass},
    length_for_code_point,
};

/// Encodes `code_point` as UTF-8.
///
/// Returns [`EncodingUnit::Invalid`] for surrogates and for values above
/// [`MAX_CODE_POINT`](crate::MAX_CODE_POINT); check the result before using
/// its octets, or call [`try_encode`] to get the reason.
///
/// ```rust
/// use utf8codec::{EncodingUnit, encode};
///
/// assert_eq!(encode(0x41), EncodingUnit::One([0x41]));
/// assert_eq!(encode(0x10000), EncodingUnit::Four([0xF0, 0x90, 0x80, 0x80]));
/// assert_eq!(encode(0x11_0000), EncodingUnit::Invalid);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(code_point: u32) -> EncodingUnit {
    let len = length_for_code_point(code_point);
    let Some(class) = LengthClass::for_len(len) else {
        return EncodingUnit::Invalid;
    };

    // Fill continuation octets from the back, six bits at a time; whatever is
    // left belongs to the leading octet.
    let mut octets = [0u8; 4];
    let mut rest = code_point;
    for octet in octets[1..len].iter_mut().rev() {
        *octet = CONTINUATION_PREFIX | (rest as u8 & CONTINUATION_MASK);
        rest >>= CONTINUATION_BITS;
    }
    octets[0] = class.prefix | (rest as u8 & class.payload_mask);

    let unit = EncodingUnit::from_bytes(&octets[..len]);
    debug_assert!(crate::is_valid(&unit), "encoded {unit:?} is malformed");
    unit
}

/// Like [`encode`], but reports [`CodecError::RangeInvalid`] instead of
/// returning [`EncodingUnit::Invalid`].
///
/// # Errors
///
/// Fails when `code_point` is a surrogate or above
/// [`MAX_CODE_POINT`](crate::MAX_CODE_POINT).
pub fn try_encode(code_point: u32) -> Result<EncodingUnit, CodecError> {
    match encode(code_point) {
        EncodingUnit::Invalid => Err(CodecError::RangeInvalid(code_point)),
        unit => Ok(unit),
    }
}

/// Encodes a `char`, which always has an encoding.
#[must_use]
pub fn encode_char(c: char) -> EncodingUnit {
    encode(u32::from(c))
}
