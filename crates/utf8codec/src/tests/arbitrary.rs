use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

use crate::{EncodingUnit, MAX_CODE_POINT};

/// Any `u32` that is a scalar value or a surrogate, weighted towards the
/// length-class boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InRange(pub(crate) u32);

const EDGES: [u32; 12] = [
    0x00, 0x7F, 0x80, 0x7FF, 0x800, 0xD7FF, 0xD800, 0xDFFF, 0xE000, 0xFFFF, 0x1_0000, 0x10_FFFF,
];

impl Arbitrary for InRange {
    fn arbitrary(g: &mut Gen) -> Self {
        let value = if bool::arbitrary(g) {
            let edge = *g.choose(&EDGES).unwrap_or(&0);
            let nudge = u32::arbitrary(g) % 3;
            edge.saturating_add(nudge).min(MAX_CODE_POINT)
        } else {
            u32::arbitrary(g) % (MAX_CODE_POINT + 1)
        };
        Self(value)
    }
}

/// A candidate unit of one to four arbitrary octets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AnyUnit(pub(crate) EncodingUnit);

impl Arbitrary for AnyUnit {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 4;
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        Self(EncodingUnit::from_bytes(&bytes))
    }
}

/// Well-formed UTF-8 with a few random octets spliced in.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Corrupted(pub(crate) Vec<u8>);

impl Arbitrary for Corrupted {
    fn arbitrary(g: &mut Gen) -> Self {
        let text: alloc::string::String = Arbitrary::arbitrary(g);
        let mut bytes = text.into_bytes();
        let edits = usize::arbitrary(g) % 3;
        for _ in 0..edits {
            let at = if bytes.is_empty() {
                0
            } else {
                usize::arbitrary(g) % (bytes.len() + 1)
            };
            bytes.insert(at, u8::arbitrary(g));
        }
        Self(bytes)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(self.0.shrink().map(Self))
    }
}
