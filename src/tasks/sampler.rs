//! Sensor sampler: the only writer of the shared reading.

use std::sync::Arc;

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::{EventSink, GasSensorPort};
use crate::reading::ReadingCell;
use crate::tasks::PeriodicTask;

pub struct SamplerTask<S, E> {
    sensor: S,
    cell: Arc<ReadingCell>,
    scale: f32,
    sink: E,
}

impl<S: GasSensorPort, E: EventSink> SamplerTask<S, E> {
    pub fn new(sensor: S, cell: Arc<ReadingCell>, scale: f32, sink: E) -> Self {
        Self {
            sensor,
            cell,
            scale,
            sink,
        }
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }
}

impl<S: GasSensorPort, E: EventSink> PeriodicTask for SamplerTask<S, E> {
    type Output = f32;

    fn id(&self) -> TaskId {
        TaskId::Sampler
    }

    /// Sample, rescale, publish.  The ADC conversion happens outside the
    /// lock; only the store is guarded.
    fn tick(&mut self) -> f32 {
        let reading = self.sensor.read_level() * self.scale;
        self.cell.set(reading);
        self.sink.emit(&AppEvent::ReadingSampled { reading });
        reading
    }
}
