//! Fan task: exhaust fan runs forward while gas is detected.

use std::sync::Arc;

use embedded_hal::digital::OutputPin;

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::EventSink;
use crate::drivers::fan::{FanDriver, FanState};
use crate::reading::ReadingCell;
use crate::tasks::PeriodicTask;

pub struct FanTask<A, B, E> {
    fan: FanDriver<A, B>,
    cell: Arc<ReadingCell>,
    threshold: f32,
    sink: E,
}

impl<A: OutputPin, B: OutputPin, E: EventSink> FanTask<A, B, E> {
    pub fn new(fan: FanDriver<A, B>, cell: Arc<ReadingCell>, threshold: f32, sink: E) -> Self {
        Self {
            fan,
            cell,
            threshold,
            sink,
        }
    }

    pub fn fan(&self) -> &FanDriver<A, B> {
        &self.fan
    }
}

impl<A: OutputPin, B: OutputPin, E: EventSink> PeriodicTask for FanTask<A, B, E> {
    type Output = FanState;

    fn id(&self) -> TaskId {
        TaskId::Fan
    }

    /// Returns the fan state after this cycle.
    fn tick(&mut self) -> FanState {
        let target = if self.cell.alarm_active(self.threshold) {
            FanState::Forward
        } else {
            FanState::Stopped
        };
        match self.fan.set(target) {
            Ok(()) => self.sink.emit(&AppEvent::FanSet(target)),
            Err(error) => self.sink.emit(&AppEvent::ActuatorFault {
                task: TaskId::Fan,
                error,
            }),
        }
        self.fan.state()
    }
}
