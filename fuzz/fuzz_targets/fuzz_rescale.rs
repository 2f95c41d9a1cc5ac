//! Fuzz target: `rescale`
//!
//! Arbitrary `(value, from, to)` triples, including widths far past 32.
//!
//! Invariants checked:
//! - No panics (shift overflow) for any width pair
//! - Equal widths are the identity
//! - Narrowing never increases the value
//!
//! cargo fuzz run fuzz_rescale

#![no_main]

use libfuzzer_sys::fuzz_target;
use samd_analog::analog::rescale;

fuzz_target!(|input: (u32, u8, u8)| {
    let (value, from, to) = input;
    let out = rescale(value, from, to);

    if from == to {
        assert_eq!(out, value);
    } else if from > to {
        assert!(out <= value);
    }
});
