//! Leak indicator LED driver.
//!
//! A single active-HIGH LED: lit while gas is detected, dark otherwise.
//! Tracks the last successfully commanded level in memory; there is no
//! read-back from the pin.

use embedded_hal::digital::OutputPin;

use crate::drivers::drive;
use crate::error::ActuatorError;

pub struct IndicatorLed<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    /// Wrap an output that hardware init has already driven LOW.
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        drive(&mut self.pin, on, "indicator")?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
