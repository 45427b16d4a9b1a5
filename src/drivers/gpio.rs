//! `embedded-hal` output pin over the raw ESP-IDF GPIO helpers.
//!
//! Actuator drivers are generic over [`OutputPin`]; this is the type they
//! get on the board.  On host builds the underlying write is a no-op, and
//! tests use [`SimPin`](super::sim_pin::SimPin) instead.

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::drivers::hw_init;

/// A failed `gpio_set_level` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError {
    pub pin: i32,
    pub code: i32,
}

impl digital::Error for GpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Digital output addressed by GPIO number.  The pin must already be
/// configured as an output by [`hw_init::init_peripherals`].
#[derive(Debug)]
pub struct GpioOut {
    pin: i32,
}

impl GpioOut {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }
}

impl ErrorType for GpioOut {
    type Error = GpioError;
}

impl OutputPin for GpioOut {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, false).map_err(|code| GpioError {
            pin: self.pin,
            code,
        })
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, true).map_err(|code| GpioError {
            pin: self.pin,
            code,
        })
    }
}
