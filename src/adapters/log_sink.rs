//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one status line per event to the
//! `log` facade (the ESP-IDF console logger in production).

use log::{info, warn};

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::EventSink;
use crate::drivers::fan::FanState;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn priority(task: TaskId) -> &'static str {
    if task.is_high_priority() {
        "High"
    } else {
        "Normal"
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                threshold,
                poll_interval_ms,
            } => {
                info!(
                    "START | threshold={:.1} | poll={}ms",
                    threshold, poll_interval_ms
                );
            }
            AppEvent::ReadingSampled { reading } => {
                let task = TaskId::Sampler;
                info!(
                    "{} task (Priority: {}): LPG value = {:.3}",
                    task.label(),
                    priority(task),
                    reading
                );
            }
            AppEvent::IndicatorSet { on } => {
                let task = TaskId::Indicator;
                info!(
                    "{} task (Priority: {}): LED turned {}",
                    task.label(),
                    priority(task),
                    on_off(*on)
                );
            }
            AppEvent::AlarmSet { on, gas } => {
                let task = TaskId::Alarm;
                let mode = if *gas { "pulsing" } else { "idle" };
                info!(
                    "{} task (Priority: {}): buzzer {} ({})",
                    task.label(),
                    priority(task),
                    on_off(*on),
                    mode
                );
            }
            AppEvent::FanSet(state) => {
                let task = TaskId::Fan;
                let text = match state {
                    FanState::Forward => "motor turned ON",
                    FanState::Stopped => "motor turned OFF",
                };
                info!("{} task (Priority: {}): {}", task.label(), priority(task), text);
            }
            AppEvent::ActuatorFault { task, error } => {
                warn!("{} task: {}", task.label(), error);
            }
        }
    }
}
