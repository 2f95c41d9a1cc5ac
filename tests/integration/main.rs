//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one controller of the
//! analog core through the public `AnalogIo` surface against the
//! simulated peripherals in `mock_hw`.  All tests run on the host.

mod dac_tests;
mod dispatch_tests;
mod pwm_tests;
