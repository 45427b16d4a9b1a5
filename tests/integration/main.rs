//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the monitor against
//! mock adapters.  All tests run on the host with no real hardware.

mod fault_tests;
mod pipeline_tests;
mod runtime_tests;
