//! Fuzz target: `AnalogConfig::from_bytes`
//!
//! Feeds arbitrary flash contents to the boot configuration decoder.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - An accepted blob always passes `validate()`
//! - An accepted config re-encodes and decodes to the same value
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use libfuzzer_sys::fuzz_target;
use samd_analog::config::AnalogConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = AnalogConfig::from_bytes(data) else {
        return;
    };
    assert!(config.validate().is_ok());

    let mut buf = [0u8; 16];
    let blob = config.to_slice(&mut buf).expect("config fits 16 bytes");
    assert_eq!(AnalogConfig::from_bytes(blob), Ok(config));
});
