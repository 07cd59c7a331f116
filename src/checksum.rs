// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Content fingerprint for font data
//!
//! Font files reached through different resolution paths must be stored only
//! once. The fingerprint computed here is the cache key used by
//! [`SourceStore`](crate::source::SourceStore) for that purpose: a rolling
//! modular checksum over the file's bytes, packed together with the file
//! length. It is cheap and deterministic but makes no claim of resistance to
//! adversarial collisions; the store re-verifies matches by comparing bytes.

use easy_cast::Cast;

/// Largest prime below 2^16; both running sums are reduced modulo this.
const MOD: u32 = 65521;

/// Maximum number of bytes processed between modulo reductions.
///
/// Invariant: `65520 + 3800 * (65520 + 255 * 3800) < 2^32`, so neither sum
/// can overflow a `u32` before the next reduction.
const BLOCK: usize = 3800;

/// Compute the 64-bit content fingerprint of `bytes`.
///
/// Layout: bits 63..48 hold the second-order sum `s2`, bits 47..32 the
/// first-order sum `s1`, bits 31..0 the (unreduced) buffer length. Both sums
/// start at zero; this is not Adler-32, which starts `s1` at one.
///
/// ```
/// # use vellum_fonts::checksum::checksum;
/// assert_eq!(checksum(&[]), 0);
/// assert_eq!(checksum(&[1, 2, 3, 4]), (20 << 48) | (10 << 32) | 4);
/// ```
pub fn checksum(bytes: &[u8]) -> u64 {
    let mut s1: u32 = 0;
    let mut s2: u32 = 0;
    for block in bytes.chunks(BLOCK) {
        for byte in block {
            s1 += u32::from(*byte);
            s2 += s1;
        }
        s1 %= MOD;
        s2 %= MOD;
    }
    let len: u32 = bytes.len().cast();
    (u64::from(s2) << 48) | (u64::from(s1) << 32) | u64::from(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn short_vector() {
        // s1 = 1+2+3+4 = 10; s2 = 1+3+6+10 = 20; length = 4
        assert_eq!(checksum(&[1, 2, 3, 4]), (20u64 << 48) | (10u64 << 32) | 4);
    }

    #[test]
    fn deterministic() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        assert_eq!(checksum(&data), checksum(&data));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(checksum(&[1, 2]), checksum(&[2, 1]));
    }

    #[test]
    fn length_in_low_bits() {
        let data = vec![0u8; 12345];
        // All-zero content leaves both sums at zero; only the length remains.
        assert_eq!(checksum(&data), 12345);
    }

    #[test]
    fn spans_multiple_blocks() {
        // Exercise the reduction path: all-0xff content long enough to cross
        // several block boundaries, checked against a naive u64 rendition.
        let data = vec![0xffu8; 3 * BLOCK + 17];
        let (mut s1, mut s2) = (0u64, 0u64);
        for byte in &data {
            s1 += u64::from(*byte);
            s2 += s1;
        }
        let expect = ((s2 % u64::from(MOD)) << 48)
            | ((s1 % u64::from(MOD)) << 32)
            | (data.len() as u64);
        assert_eq!(checksum(&data), expect);
    }
}
