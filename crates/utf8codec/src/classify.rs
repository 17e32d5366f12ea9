//! Range classification.
//!
//! Two independent paths answer "how many octets?": one keyed by the value of
//! a code point, one keyed by the bit pattern of a leading octet. Both return
//! `0` for anything that has no encoding.
//!
//! ```text
//! length  code points            leading octet   free bits
//!      1  U+0000   ..= U+007F    0xxxxxxx        7
//!      2  U+0080   ..= U+07FF    110xxxxx        5
//!      3  U+0800   ..= U+FFFF    1110xxxx        4   (minus surrogates)
//!      4  U+10000  ..= U+10FFFF  11110xxx        3
//! ```

/// The largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Fixed prefix of every continuation octet (`10xxxxxx`).
pub(crate) const CONTINUATION_PREFIX: u8 = 0x80;
/// Bits of a continuation octet that must equal [`CONTINUATION_PREFIX`].
pub(crate) const CONTINUATION_TAG_MASK: u8 = 0xC0;
/// Payload bits of a continuation octet.
pub(crate) const CONTINUATION_MASK: u8 = 0x3F;
/// Payload width of a continuation octet.
pub(crate) const CONTINUATION_BITS: u32 = 6;

/// Leading-octet layout of one length class.
#[derive(Debug)]
pub(crate) struct LengthClass {
    /// Fixed high bits of the leading octet.
    pub(crate) prefix: u8,
    /// Bits of the leading octet that must equal `prefix`: the run of 1-bits
    /// plus the 0-bit separator.
    pub(crate) tag_mask: u8,
    /// Free bits of the leading octet.
    pub(crate) payload_mask: u8,
    /// Smallest code point that needs this many octets.
    pub(crate) min: u32,
}

static CLASSES: [LengthClass; 4] = [
    LengthClass {
        prefix: 0x00,
        tag_mask: 0x80,
        payload_mask: 0x7F,
        min: 0x00_0000,
    },
    LengthClass {
        prefix: 0xC0,
        tag_mask: 0xE0,
        payload_mask: 0x1F,
        min: 0x00_0080,
    },
    LengthClass {
        prefix: 0xE0,
        tag_mask: 0xF0,
        payload_mask: 0x0F,
        min: 0x00_0800,
    },
    LengthClass {
        prefix: 0xF0,
        tag_mask: 0xF8,
        payload_mask: 0x07,
        min: 0x01_0000,
    },
];

impl LengthClass {
    /// Layout for a sequence of `len` octets, `None` outside `1..=4`.
    pub(crate) fn for_len(len: usize) -> Option<&'static LengthClass> {
        len.checked_sub(1).and_then(|index| CLASSES.get(index))
    }
}

#[inline]
pub(crate) const fn is_continuation(octet: u8) -> bool {
    octet & CONTINUATION_TAG_MASK == CONTINUATION_PREFIX
}

/// Number of octets needed to encode `code_point`.
///
/// Returns `0` for surrogates (`0xD800..=0xDFFF`) and for anything above
/// [`MAX_CODE_POINT`].
#[must_use]
pub const fn length_for_code_point(code_point: u32) -> usize {
    match code_point {
        0x00_0000..=0x00_007F => 1,
        0x00_0080..=0x00_07FF => 2,
        0x00_D800..=0x00_DFFF => 0,
        0x00_0800..=0x00_FFFF => 3,
        0x01_0000..=MAX_CODE_POINT => 4,
        _ => 0,
    }
}

/// Sequence length announced by a leading octet.
///
/// Returns `0` for continuation octets (`10xxxxxx`) and for `11111xxx`.
#[must_use]
pub const fn length_for_leading_octet(octet: u8) -> usize {
    match octet.leading_ones() {
        0 => 1,
        2 => 2,
        3 => 3,
        4 => 4,
        _ => 0,
    }
}
