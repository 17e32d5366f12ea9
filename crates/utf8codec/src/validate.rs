use crate::{
    CodecError, EncodingUnit,
    classify::{LengthClass, is_continuation},
};

/// Checks the structure of `unit` against its length class.
///
/// Every octet after the first must be `10xxxxxx`, and the first octet must
/// carry exactly the prefix for the unit's length: the right number of 1-bits
/// followed by the 0-bit separator. Overlong forms pass this check; they are
/// rejected by [`decode`](crate::decode).
///
/// # Errors
///
/// [`CodecError::InvalidUnit`] for [`EncodingUnit::Invalid`],
/// [`CodecError::MalformedContinuation`] for the first bad continuation octet,
/// [`CodecError::MalformedPrefix`] for a leading octet of the wrong class.
pub fn validate(unit: &EncodingUnit) -> Result<(), CodecError> {
    split(unit).map(|_| ())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(unit: &EncodingUnit) -> bool {
    validate(unit).is_ok()
}

/// Validates `unit` and hands back its length class, leading octet and
/// continuation octets.
pub(crate) fn split(
    unit: &EncodingUnit,
) -> Result<(&'static LengthClass, u8, &[u8]), CodecError> {
    let bytes = unit.as_bytes();
    let (Some(class), Some((&first, rest))) = (LengthClass::for_len(bytes.len()), bytes.split_first())
    else {
        return Err(CodecError::InvalidUnit);
    };

    if let Some((index, &octet)) = rest
        .iter()
        .enumerate()
        .find(|&(_, &octet)| !is_continuation(octet))
    {
        return Err(CodecError::MalformedContinuation {
            index: index + 1,
            octet,
        });
    }

    if first & class.tag_mask != class.prefix {
        return Err(CodecError::MalformedPrefix(first));
    }

    Ok((class, first, rest))
}
