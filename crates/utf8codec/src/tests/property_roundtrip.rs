use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use super::{
    arbitrary::{AnyUnit, InRange},
    quickcheck_tests,
};
use crate::{
    EncodingUnit, decode, decode_buffer, encode, encode_char, is_valid, length_for_code_point,
    length_for_leading_octet,
};

/// Property: decoding what was encoded gives back the code point.
#[test]
fn encode_decode_roundtrip() {
    fn prop(InRange(code_point): InRange) -> TestResult {
        if (0xD800..=0xDFFF).contains(&code_point) {
            return TestResult::from_bool(encode(code_point).is_invalid());
        }
        TestResult::from_bool(decode(&encode(code_point)).map(u32::from) == Ok(code_point))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(InRange) -> TestResult);
}

/// Property: both classifier paths agree with the encoder.
#[quickcheck]
fn lengths_agree(c: char) -> bool {
    let unit = encode_char(c);
    let len = length_for_code_point(u32::from(c));
    unit.len() == len
        && unit.first_octet().map(length_for_leading_octet) == Some(len)
        && len == c.len_utf8()
}

/// Property: a unit is only ever decoded to the char whose encoding it is.
#[quickcheck]
fn decode_is_injective(unit: AnyUnit) -> bool {
    match decode(&unit.0) {
        Ok(c) => encode_char(c) == unit.0,
        Err(_) => true,
    }
}

/// Property: a corrupted continuation octet is always rejected.
#[quickcheck]
fn bad_continuation_never_validates(c: char, position: usize, octet: u8) -> TestResult {
    let unit = encode_char(c);
    if unit.len() < 2 || octet & 0xC0 == 0x80 {
        return TestResult::discard();
    }
    let mut bytes = [0u8; 4];
    bytes[..unit.len()].copy_from_slice(unit.as_bytes());
    bytes[1 + position % (unit.len() - 1)] = octet;
    TestResult::from_bool(!is_valid(&EncodingUnit::from_bytes(&bytes[..unit.len()])))
}

/// Property: concatenated units decode as the original text.
#[quickcheck]
fn concatenated_units_decode(text: String) -> bool {
    let bytes: Vec<u8> = text
        .chars()
        .flat_map(|c| encode_char(c).as_bytes().to_vec())
        .collect();
    bytes == text.as_bytes() && decode_buffer(&bytes) == Ok(text.chars().collect())
}
