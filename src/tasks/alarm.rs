//! Alarm task: buzzer pulses while gas is detected.
//!
//! While the condition holds, each cycle inverts the buzzer, so it sounds
//! for one poll period out of every two.  When the condition clears the
//! buzzer is forced off, whatever phase it was in.

use std::sync::Arc;

use embedded_hal::digital::OutputPin;

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::EventSink;
use crate::drivers::buzzer::Buzzer;
use crate::reading::ReadingCell;
use crate::tasks::PeriodicTask;

pub struct AlarmTask<P, E> {
    buzzer: Buzzer<P>,
    cell: Arc<ReadingCell>,
    threshold: f32,
    sink: E,
}

impl<P: OutputPin, E: EventSink> AlarmTask<P, E> {
    pub fn new(buzzer: Buzzer<P>, cell: Arc<ReadingCell>, threshold: f32, sink: E) -> Self {
        Self {
            buzzer,
            cell,
            threshold,
            sink,
        }
    }

    pub fn buzzer(&self) -> &Buzzer<P> {
        &self.buzzer
    }
}

impl<P: OutputPin, E: EventSink> PeriodicTask for AlarmTask<P, E> {
    type Output = bool;

    fn id(&self) -> TaskId {
        TaskId::Alarm
    }

    /// Returns the buzzer level after this cycle.
    fn tick(&mut self) -> bool {
        let gas = self.cell.alarm_active(self.threshold);
        let result = if gas {
            self.buzzer.toggle().map(|_| ())
        } else {
            self.buzzer.silence()
        };
        match result {
            Ok(()) => self.sink.emit(&AppEvent::AlarmSet {
                on: self.buzzer.is_sounding(),
                gas,
            }),
            Err(error) => self.sink.emit(&AppEvent::ActuatorFault {
                task: TaskId::Alarm,
                error,
            }),
        }
        self.buzzer.is_sounding()
    }
}
