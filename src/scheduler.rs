//! Task scheduler / bootstrap.
//!
//! Spawns the four monitoring loops as independent prioritised threads,
//! all sharing one [`ReadingCell`]:
//!
//! ```text
//! ┌───────────────────────── App core (high) ─────────────────────────┐
//! │   sampler ──set──┐                                 ┌──get── fan   │
//! └──────────────────┼─────────────────────────────────┼──────────────┘
//!                    ▼                                 │
//!              ┌─────────────┐                         │
//!              │ ReadingCell │◀────────────────────────┘
//!              └─────────────┘
//!                    ▲           ▲
//! ┌──────────────────┼───────────┼──── Pro core (normal) ─────────────┐
//! │            indicator       alarm                                  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! After spawning, the caller parks the main thread in
//! [`RunningMonitor::idle_forever`].

use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{Context, Result, bail};
use embedded_hal::digital::OutputPin;
use log::{error, info};

use crate::app::events::{AppEvent, TaskId};
use crate::app::ports::{EventSink, GasSensorPort};
use crate::config::MonitorConfig;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::fan::FanDriver;
use crate::drivers::indicator::IndicatorLed;
use crate::drivers::task_pin::{Core, spawn_on_core};
use crate::reading::ReadingCell;
use crate::tasks::{AlarmTask, FanTask, IndicatorTask, SamplerTask, StopFlag, run_periodic};

/// Everything the monitor drives, handed over at start.
pub struct Hardware<S, L, Z, A, B> {
    pub sensor: S,
    pub indicator: IndicatorLed<L>,
    pub buzzer: Buzzer<Z>,
    pub fan: FanDriver<A, B>,
}

/// Handle to the spawned task set.
pub struct RunningMonitor {
    cell: Arc<ReadingCell>,
    stop: StopFlag,
    handles: Vec<(TaskId, JoinHandle<()>)>,
    idle_interval: std::time::Duration,
}

/// Spawn the sampler, fan, indicator and alarm loops.
///
/// Each task gets its own clone of `sink`.  If any spawn fails, the tasks
/// already running are told to stop before the error is returned.
pub fn start<S, L, Z, A, B, E>(
    config: &MonitorConfig,
    hw: Hardware<S, L, Z, A, B>,
    sink: E,
) -> Result<RunningMonitor>
where
    S: GasSensorPort + Send + 'static,
    L: OutputPin + Send + 'static,
    Z: OutputPin + Send + 'static,
    A: OutputPin + Send + 'static,
    B: OutputPin + Send + 'static,
    E: EventSink + Clone + Send + 'static,
{
    config.validate()?;

    let cell = Arc::new(ReadingCell::new());
    let stop = StopFlag::new();
    let mut monitor = RunningMonitor {
        cell: Arc::clone(&cell),
        stop: stop.clone(),
        handles: Vec::with_capacity(4),
        idle_interval: config.idle_interval(),
    };

    let period = config.poll_interval();
    let threshold = config.alarm_threshold;
    let stack_kb = config.task_stack_kb;

    let sampler = SamplerTask::new(hw.sensor, Arc::clone(&cell), config.sensor_scale, sink.clone());
    let fan = FanTask::new(hw.fan, Arc::clone(&cell), threshold, sink.clone());
    let indicator = IndicatorTask::new(hw.indicator, Arc::clone(&cell), threshold, sink.clone());
    let alarm = AlarmTask::new(hw.buzzer, Arc::clone(&cell), threshold, sink.clone());

    let spawns: [(TaskId, Core, u8, &'static str, Box<dyn FnOnce(StopFlag) + Send>); 4] = [
        (
            TaskId::Sampler,
            Core::App,
            config.high_priority,
            "sampler\0",
            Box::new(move |stop| run_periodic(sampler, period, &stop)),
        ),
        (
            TaskId::Fan,
            Core::App,
            config.high_priority,
            "fan\0",
            Box::new(move |stop| run_periodic(fan, period, &stop)),
        ),
        (
            TaskId::Indicator,
            Core::Pro,
            config.normal_priority,
            "indicator\0",
            Box::new(move |stop| run_periodic(indicator, period, &stop)),
        ),
        (
            TaskId::Alarm,
            Core::Pro,
            config.normal_priority,
            "alarm\0",
            Box::new(move |stop| run_periodic(alarm, period, &stop)),
        ),
    ];

    for (id, core, priority, name, body) in spawns {
        let task_stop = stop.clone();
        match spawn_on_core(core, priority, stack_kb, name, move || body(task_stop)) {
            Ok(handle) => monitor.handles.push((id, handle)),
            Err(e) => {
                error!("Scheduler: failed to spawn {} task: {}", id.label(), e);
                monitor.stop.raise();
                return Err(e).with_context(|| format!("spawning {} task", id.label()));
            }
        }
    }

    let mut sink = sink;
    sink.emit(&AppEvent::Started {
        threshold,
        poll_interval_ms: config.poll_interval_ms,
    });

    Ok(monitor)
}

impl RunningMonitor {
    /// The reading shared by every task.
    pub fn cell(&self) -> &Arc<ReadingCell> {
        &self.cell
    }

    /// Tasks spawned, in spawn order.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.handles.iter().map(|(id, _)| *id).collect()
    }

    /// Park the calling thread forever.  The tasks keep running.
    pub fn idle_forever(&self) -> ! {
        info!("Scheduler: main thread idling");
        loop {
            std::thread::sleep(self.idle_interval);
        }
    }

    /// Raise the stop flag and join every task.
    ///
    /// Fails if any task panicked; the remaining tasks are still joined.
    pub fn shutdown(self) -> Result<()> {
        self.stop.raise();
        let mut panicked = Vec::new();
        for (id, handle) in self.handles {
            if handle.join().is_err() {
                error!("Scheduler: {} task panicked", id.label());
                panicked.push(id.label());
            }
        }
        if !panicked.is_empty() {
            bail!("tasks panicked: {}", panicked.join(", "));
        }
        info!("Scheduler: all tasks stopped");
        Ok(())
    }
}
