//! MQ-2 LPG / smoke gas sensor driver.
//!
//! Reads the analog output through an ESP32-S3 ADC channel and normalizes
//! the raw count to `[0, 1]`.  No calibration, smoothing, or plausibility
//! check: the sampler trusts whatever the hardware reports.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads a static level injected with [`sim_set_mq2_level`].

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

use crate::app::ports::GasSensorPort;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(any(target_os = "espidf", test))]
use crate::error::SensorError;
use crate::pins;

/// `f32` bits of the simulated normalized level.
#[cfg(not(target_os = "espidf"))]
static SIM_MQ2_LEVEL: AtomicU32 = AtomicU32::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_mq2_level(level: f32) {
    SIM_MQ2_LEVEL.store(level.to_bits(), Ordering::Relaxed);
}

/// Convert a raw 12-bit ADC count to a normalized level.
pub fn normalize(raw: u16) -> f32 {
    f32::from(raw) / f32::from(pins::ADC_FULL_SCALE)
}

pub struct Mq2Sensor {
    channel: u32,
    total_reads: u32,
    failed_reads: u32,
    last_level: f32,
}

impl Mq2Sensor {
    pub fn new(channel: u32) -> Self {
        Self {
            channel,
            total_reads: 0,
            failed_reads: 0,
            last_level: 0.0,
        }
    }

    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }

    pub fn failed_reads(&self) -> u32 {
        self.failed_reads
    }

    /// Fold one conversion result into the reported level.
    ///
    /// A failed conversion repeats the last good level, so a transient ADC
    /// error during a leak keeps the actuators on instead of reading as
    /// clean air.  Before the first good read that level is 0.0.
    #[cfg(any(target_os = "espidf", test))]
    fn accept(&mut self, sample: Result<u16, SensorError>) -> f32 {
        match sample {
            Ok(raw) => self.last_level = normalize(raw),
            Err(e) => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                log::warn!("MQ-2: {}, holding {:.4}", e, self.last_level);
            }
        }
        self.last_level
    }

    #[cfg(target_os = "espidf")]
    fn read_raw_level(&mut self) -> f32 {
        let sample = hw_init::adc1_read(self.channel);
        self.accept(sample)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw_level(&mut self) -> f32 {
        let _ = self.channel;
        self.last_level = f32::from_bits(SIM_MQ2_LEVEL.load(Ordering::Relaxed));
        self.last_level
    }
}

impl GasSensorPort for Mq2Sensor {
    fn read_level(&mut self) -> f32 {
        self.total_reads = self.total_reads.saturating_add(1);
        self.read_raw_level()
    }
}
