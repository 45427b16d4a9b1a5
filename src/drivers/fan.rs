//! Exhaust fan motor driver (dual-input H-bridge, e.g. L298N).
//!
//! Two digital lines select the bridge mode:
//!
//! | IN1 | IN2 | Mode    |
//! |-----|-----|---------|
//! |  1  |  0  | forward |
//! |  0  |  0  | stopped |
//!
//! Reverse (0,1) and brake (1,1) are never commanded, so the fan has no
//! `Direction` to choose.
//!
//! ## Line ordering
//!
//! Starting: IN2 is written LOW before IN1 goes HIGH.  Stopping: IN1 goes
//! LOW first.  The bridge never sees (0,1) or (1,1) in between.

use embedded_hal::digital::OutputPin;

use crate::drivers::drive;
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanState {
    Stopped,
    Forward,
}

/// Levels last commanded on the two motor lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorLines {
    pub in1: bool,
    pub in2: bool,
}

impl FanState {
    pub const fn lines(self) -> MotorLines {
        match self {
            Self::Forward => MotorLines {
                in1: true,
                in2: false,
            },
            Self::Stopped => MotorLines {
                in1: false,
                in2: false,
            },
        }
    }
}

pub struct FanDriver<A, B> {
    in1: A,
    in2: B,
    state: FanState,
}

impl<A: OutputPin, B: OutputPin> FanDriver<A, B> {
    pub fn new(in1: A, in2: B) -> Self {
        Self {
            in1,
            in2,
            state: FanState::Stopped,
        }
    }

    pub fn set(&mut self, state: FanState) -> Result<(), ActuatorError> {
        match state {
            FanState::Forward => self.run_forward(),
            FanState::Stopped => self.stop(),
        }
    }

    pub fn run_forward(&mut self) -> Result<(), ActuatorError> {
        drive(&mut self.in2, false, "fan IN2")?;
        drive(&mut self.in1, true, "fan IN1")?;
        self.state = FanState::Forward;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        drive(&mut self.in1, false, "fan IN1")?;
        drive(&mut self.in2, false, "fan IN2")?;
        self.state = FanState::Stopped;
        Ok(())
    }

    pub fn state(&self) -> FanState {
        self.state
    }

    pub fn lines(&self) -> MotorLines {
        self.state.lines()
    }

    pub fn is_running(&self) -> bool {
        self.state == FanState::Forward
    }
}
