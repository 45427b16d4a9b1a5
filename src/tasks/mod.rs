//! The four periodic monitoring units.
//!
//! | Task        | Reads cell | Writes cell | Output            | Priority |
//! |-------------|------------|-------------|-------------------|----------|
//! | `sampler`   |            | ✓           |                   | high     |
//! | `indicator` | ✓          |             | LED               | normal   |
//! | `alarm`     | ✓          |             | buzzer (pulsing)  | normal   |
//! | `fan`       | ✓          |             | motor IN1/IN2     | high     |
//!
//! Every task exposes a single-cycle [`PeriodicTask::tick`] so cycles can
//! be driven deterministically from tests; [`run_periodic`] wraps it in
//! the tick-then-sleep loop the scheduler spawns.

pub mod alarm;
pub mod fan;
pub mod indicator;
pub mod sampler;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::info;

use crate::app::events::TaskId;

pub use alarm::AlarmTask;
pub use fan::FanTask;
pub use indicator::IndicatorTask;
pub use sampler::SamplerTask;

/// One unit of periodic work.
pub trait PeriodicTask {
    /// What one cycle produced (the new reading or output level).
    type Output;

    fn id(&self) -> TaskId;

    /// Run exactly one cycle.  Must not sleep.
    fn tick(&mut self) -> Self::Output;
}

/// Cooperative stop signal shared by every task loop.
///
/// Production firmware never raises it; the loops run until power-off.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Tick `task`, then sleep `period`, until `stop` is raised.
///
/// The flag is checked once per cycle, so a stop takes effect within one
/// period.
pub fn run_periodic<T: PeriodicTask>(mut task: T, period: Duration, stop: &StopFlag) {
    let id = task.id();
    info!("{} task: loop started ({}ms)", id.label(), period.as_millis());
    while !stop.is_raised() {
        task.tick();
        std::thread::sleep(period);
    }
    info!("{} task: loop stopped", id.label());
}
