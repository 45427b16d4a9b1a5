//! Indicator task: LED lit while gas is detected.

use std::sync::Arc;

use embedded_hal::digital::OutputPin;

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::EventSink;
use crate::drivers::indicator::IndicatorLed;
use crate::reading::ReadingCell;
use crate::tasks::PeriodicTask;

pub struct IndicatorTask<P, E> {
    led: IndicatorLed<P>,
    cell: Arc<ReadingCell>,
    threshold: f32,
    sink: E,
}

impl<P: OutputPin, E: EventSink> IndicatorTask<P, E> {
    pub fn new(led: IndicatorLed<P>, cell: Arc<ReadingCell>, threshold: f32, sink: E) -> Self {
        Self {
            led,
            cell,
            threshold,
            sink,
        }
    }

    pub fn led(&self) -> &IndicatorLed<P> {
        &self.led
    }
}

impl<P: OutputPin, E: EventSink> PeriodicTask for IndicatorTask<P, E> {
    type Output = bool;

    fn id(&self) -> TaskId {
        TaskId::Indicator
    }

    /// Returns the LED level after this cycle.
    fn tick(&mut self) -> bool {
        let gas = self.cell.alarm_active(self.threshold);
        match self.led.set(gas) {
            Ok(()) => self.sink.emit(&AppEvent::IndicatorSet { on: gas }),
            Err(error) => self.sink.emit(&AppEvent::ActuatorFault {
                task: TaskId::Indicator,
                error,
            }),
        }
        self.led.is_on()
    }
}
