//! Sensor subsystem.
//!
//! One analog gas sensor, exposed to the sampler through
//! [`GasSensorPort`](crate::app::ports::GasSensorPort).

pub mod mq2;
