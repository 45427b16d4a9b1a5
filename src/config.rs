//! Monitor configuration parameters
//!
//! Every tunable the monitor uses.  Production firmware only ever runs with
//! [`MonitorConfig::default()`]; there is no config file or NVS overlay.
//! Host tests construct configs with shorter intervals.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Core monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Gas detection ---
    /// Reading (working units) at or above which the alarm condition holds
    pub alarm_threshold: f32,
    /// Multiplier from normalized sensor level [0,1] to working units
    pub sensor_scale: f32,

    // --- Timing ---
    /// Period of the sampler and every actuator loop (milliseconds)
    pub poll_interval_ms: u32,
    /// Sleep of the idle main thread (milliseconds)
    pub idle_interval_ms: u32,

    // --- Threads ---
    /// FreeRTOS priority for the sampler and fan tasks
    pub high_priority: u8,
    /// FreeRTOS priority for the indicator and alarm tasks
    pub normal_priority: u8,
    /// Stack size per task (KiB)
    pub task_stack_kb: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Gas detection
            alarm_threshold: 20.0,
            sensor_scale: 1000.0,

            // Timing
            poll_interval_ms: 500,
            idle_interval_ms: 1000,

            // Threads
            high_priority: 10,
            normal_priority: 5,
            task_stack_kb: 4,
        }
    }
}

impl MonitorConfig {
    /// Reject values that would make the loops meaningless.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.alarm_threshold.is_finite() {
            return Err(Error::Config("alarm_threshold must be finite"));
        }
        if !(self.sensor_scale.is_finite() && self.sensor_scale > 0.0) {
            return Err(Error::Config("sensor_scale must be positive"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.idle_interval_ms == 0 {
            return Err(Error::Config("idle_interval_ms must be non-zero"));
        }
        if self.high_priority <= self.normal_priority {
            return Err(Error::Config("high_priority must exceed normal_priority"));
        }
        if self.task_stack_kb == 0 {
            return Err(Error::Config("task_stack_kb must be non-zero"));
        }
        Ok(())
    }

    /// Poll period as a `Duration`.
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Idle period as a `Duration`.
    pub fn idle_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.idle_interval_ms))
    }

    /// Compact JSON dump for the boot log.
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("<unserializable>"))
    }
}
