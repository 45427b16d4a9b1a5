//! GasWatch Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Mq2Sensor (ADC1)          GpioOut × 4 (LED, buzzer, fan)  │
//! │  ─────────────── Port / embedded-hal boundary ───────────  │
//! │  sampler ─▶ ReadingCell ◀─ indicator · alarm · fan         │
//! │  LogEventSink (status lines)                               │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use gaswatch::adapters::log_sink::LogEventSink;
use gaswatch::config::MonitorConfig;
use gaswatch::drivers::buzzer::Buzzer;
use gaswatch::drivers::fan::FanDriver;
use gaswatch::drivers::gpio::GpioOut;
use gaswatch::drivers::hw_init;
use gaswatch::drivers::indicator::IndicatorLed;
use gaswatch::pins;
use gaswatch::scheduler::{self, Hardware};
use gaswatch::sensors::mq2::Mq2Sensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("GasWatch v{}: main thread started", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled-in constants) ──────────────
    let config = MonitorConfig::default();
    info!("Config: {}", config.to_log_string());

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Nothing can be monitored without the ADC and outputs.
        log::error!("HAL init failed ({}), halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Construct drivers ──────────────────────────────────
    let hw = Hardware {
        sensor: Mq2Sensor::new(pins::MQ2_ADC_CHANNEL),
        indicator: IndicatorLed::new(GpioOut::new(pins::INDICATOR_LED_GPIO)),
        buzzer: Buzzer::new(GpioOut::new(pins::BUZZER_GPIO)),
        fan: FanDriver::new(
            GpioOut::new(pins::FAN_IN1_GPIO),
            GpioOut::new(pins::FAN_IN2_GPIO),
        ),
    };

    // ── 5. Spawn tasks and idle ───────────────────────────────
    let monitor = scheduler::start(&config, hw, LogEventSink::new())?;
    info!("System ready. Main thread idling.");
    monitor.idle_forever()
}
