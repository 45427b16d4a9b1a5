//! Application core: port traits and outbound events.
//!
//! The monitoring tasks talk to the outside world only through the
//! **port traits** in [`ports`], so the sampling and actuation rules are
//! testable on the host without real peripherals.

pub mod events;
pub mod ports;
