#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utf8codec::{EncodingUnit, WriterOptions, decode, decode_buffer, encode, write_to};

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Code points on either side of every length-class and surrogate boundary.
static EDGES: &[u32] = &[
    0x00, 0x7F, 0x80, 0x7FF, 0x800, 0xD7FF, 0xD800, 0xDFFF, 0xE000, 0xFFFF, 0x1_0000, 0x10_FFFF,
    0x11_0000,
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Append encodings of random code points near the class boundaries, with
/// the occasional stray octet, never exceeding `limit` bytes.
fn append_units(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let mut written = 0;
        while written < limit {
            let bytes: Vec<u8> = if rng.random_ratio(1, 8) {
                vec![rng.random::<u8>()]
            } else {
                let edge = EDGES[rng.random_range(0..EDGES.len())];
                let cp = edge.saturating_add(rng.random_range(0..4));
                encode(cp).as_bytes().to_vec()
            };
            if bytes.is_empty() || written + bytes.len() > limit {
                break;
            }
            buf[written..written + bytes.len()].copy_from_slice(&bytes);
            written += bytes.len();
        }
        written
    })
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || seed.is_multiple_of(10) {
        append_units(data, max_size.min(256))
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Candidate {
    octets: Vec<u8>,
}

fn check(data: &[u8]) {
    // The buffer decoder must accept exactly what the standard library
    // accepts, fail at the same offset, and produce the same chars.
    match (decode_buffer(data), std::str::from_utf8(data)) {
        (Ok(chars), Ok(text)) => {
            assert!(chars.iter().copied().eq(text.chars()));

            let units: Vec<EncodingUnit> = chars.iter().map(|&c| encode(u32::from(c))).collect();
            let mut out = Vec::new();
            write_to(&mut out, &units, &WriterOptions::default()).unwrap();
            assert_eq!(&out[..out.len() - 1], data);
        }
        (Err(err), Err(std_err)) => assert_eq!(err.offset(), std_err.valid_up_to()),
        (ours, theirs) => panic!("disagreement: {ours:?} vs {theirs:?}"),
    }

    // A single unit decodes only to the char whose encoding it is.
    if let Ok(candidate) = Candidate::arbitrary(&mut arbitrary::Unstructured::new(data)) {
        let unit = EncodingUnit::from_bytes(&candidate.octets);
        if let Ok(c) = decode(&unit) {
            assert_eq!(encode(u32::from(c)), unit);
        }
    }
}

fuzz_target!(|data: &[u8]| check(data));
