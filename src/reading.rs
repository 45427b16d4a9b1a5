//! Shared gas reading and the threshold predicate.
//!
//! ```text
//!   Sampler ──set()──▶ ┌─────────────┐ ──get()──▶ Indicator
//!                      │ ReadingCell │ ──get()──▶ Alarm
//!                      └─────────────┘ ──get()──▶ Fan
//! ```
//!
//! The cell is a single `f32` behind an `embassy-sync` blocking mutex.
//! Locking is closure-scoped, so a caller cannot hold the lock across a
//! sleep or a pin write.  The sampler is the only writer.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// The latest gas observation in working units (normalized level × scale).
pub struct ReadingCell {
    value: Mutex<CriticalSectionRawMutex, Cell<f32>>,
}

impl Default for ReadingCell {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingCell {
    /// A cell holding `0.0`, the boot-time reading.
    pub const fn new() -> Self {
        Self {
            value: Mutex::new(Cell::new(0.0)),
        }
    }

    /// Overwrite the reading.
    pub fn set(&self, value: f32) {
        self.value.lock(|v| v.set(value));
    }

    /// Latest reading.
    pub fn get(&self) -> f32 {
        self.value.lock(Cell::get)
    }

    /// Read and evaluate the alarm condition inside one locked section.
    pub fn alarm_active(&self, threshold: f32) -> bool {
        self.value.lock(|v| gas_detected(v.get(), threshold))
    }
}

/// Alarm condition: `reading >= threshold`.  No hysteresis.
#[inline]
pub fn gas_detected(reading: f32, threshold: f32) -> bool {
    reading >= threshold
}
