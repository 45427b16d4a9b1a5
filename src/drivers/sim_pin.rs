//! In-memory output pin for host simulation and tests.
//!
//! The pin and every clone of it share one level, so a test can hand a
//! clone to a task thread and keep another to observe the output.

use core::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Default)]
struct Shared {
    high: AtomicBool,
    writes: AtomicU32,
    rising_edges: AtomicU32,
}

/// Simulated push-pull output.  Starts LOW.
#[derive(Debug, Clone, Default)]
pub struct SimPin {
    shared: Arc<Shared>,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current output level.
    pub fn is_high(&self) -> bool {
        self.shared.high.load(Ordering::Acquire)
    }

    /// Total `set_high`/`set_low` calls.
    pub fn writes(&self) -> u32 {
        self.shared.writes.load(Ordering::Relaxed)
    }

    /// LOW → HIGH transitions observed.
    pub fn rising_edges(&self) -> u32 {
        self.shared.rising_edges.load(Ordering::Relaxed)
    }

    fn drive(&self, high: bool) {
        let was_high = self.shared.high.swap(high, Ordering::AcqRel);
        if high && !was_high {
            self.shared.rising_edges.fetch_add(1, Ordering::Relaxed);
        }
        self.shared.writes.fetch_add(1, Ordering::Relaxed);
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}
