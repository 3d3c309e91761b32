mod parse_good;

use alloc::vec::Vec;

pub(crate) fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[cfg(not(miri))]
pub(crate) fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[cfg(miri)]
pub(crate) fn quickcheck_tests() -> u64 {
    10
}
