//! Piezo buzzer driver.
//!
//! Driven through a transistor on one GPIO.  The alarm task pulses it by
//! calling [`Buzzer::toggle`] once per poll period, which yields a square
//! wave whose period is two poll intervals.

use embedded_hal::digital::OutputPin;

use crate::drivers::drive;
use crate::error::ActuatorError;

pub struct Buzzer<P> {
    pin: P,
    sounding: bool,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            sounding: false,
        }
    }

    /// Invert the output.  Returns the new level.
    pub fn toggle(&mut self) -> Result<bool, ActuatorError> {
        let next = !self.sounding;
        drive(&mut self.pin, next, "buzzer")?;
        self.sounding = next;
        Ok(next)
    }

    /// Force the output LOW regardless of its current level.
    pub fn silence(&mut self) -> Result<(), ActuatorError> {
        drive(&mut self.pin, false, "buzzer")?;
        self.sounding = false;
        Ok(())
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}
