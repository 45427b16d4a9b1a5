//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod buzzer;
pub mod fan;
pub mod gpio;
pub mod hw_init;
pub mod indicator;
pub mod sim_pin;
pub mod task_pin;

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::ActuatorError;

/// Drive `pin` to `high`, naming the line in the error on failure.
pub(crate) fn drive<P: OutputPin>(
    pin: &mut P,
    high: bool,
    line: &'static str,
) -> Result<(), ActuatorError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| ActuatorError::GpioWriteFailed(line))
}
