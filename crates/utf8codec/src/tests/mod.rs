mod arbitrary;

mod property_roundtrip;

/// QuickCheck iteration count: more on CI, fewer under Miri.
pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
