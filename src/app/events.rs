//! Outbound application events.
//!
//! Each monitoring task emits one of these per cycle through the
//! [`EventSink`](super::ports::EventSink) port.  The production adapter
//! renders them as console status lines; tests record them.

use crate::drivers::fan::FanState;
use crate::error::ActuatorError;

/// Which periodic unit produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    Sampler,
    Indicator,
    Alarm,
    Fan,
}

impl TaskId {
    /// Human-readable task name used in status lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sampler => "Sensor",
            Self::Indicator => "Indicator",
            Self::Alarm => "Alarm",
            Self::Fan => "Fan",
        }
    }

    /// Whether the unit runs at elevated priority.
    pub const fn is_high_priority(self) -> bool {
        matches!(self, Self::Sampler | Self::Fan)
    }
}

/// Structured events emitted by the monitoring tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The scheduler has spawned every task.
    Started { threshold: f32, poll_interval_ms: u32 },

    /// The sampler stored a new reading (working units).
    ReadingSampled { reading: f32 },

    /// The indicator output was driven to `on`.
    IndicatorSet { on: bool },

    /// The alarm output was driven to `on`; `gas` is the condition seen.
    AlarmSet { on: bool, gas: bool },

    /// The fan motor lines were driven to `state`.
    FanSet(FanState),

    /// A pin write failed; the task keeps running.
    ActuatorFault { task: TaskId, error: ActuatorError },
}

impl AppEvent {
    /// The task an event originates from, if any.
    pub fn task(&self) -> Option<TaskId> {
        match self {
            Self::Started { .. } => None,
            Self::ReadingSampled { .. } => Some(TaskId::Sampler),
            Self::IndicatorSet { .. } => Some(TaskId::Indicator),
            Self::AlarmSet { .. } => Some(TaskId::Alarm),
            Self::FanSet(_) => Some(TaskId::Fan),
            Self::ActuatorFault { task, .. } => Some(*task),
        }
    }
}
