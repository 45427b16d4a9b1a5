//! Pin-write failures: a fault event instead of a status line, the
//! tracked output state untouched, and the loop carrying on.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gaswatch::app::events::{AppEvent, TaskId};
use gaswatch::config::MonitorConfig;
use gaswatch::drivers::buzzer::Buzzer;
use gaswatch::drivers::fan::{FanDriver, FanState};
use gaswatch::drivers::indicator::IndicatorLed;
use gaswatch::drivers::sim_pin::SimPin;
use gaswatch::error::ActuatorError;
use gaswatch::reading::ReadingCell;
use gaswatch::scheduler::{self, Hardware};
use gaswatch::tasks::{AlarmTask, FanTask, IndicatorTask, PeriodicTask};

use crate::mock_hw::{FailingPin, RecordingSink, ScriptedSensor};

const THRESHOLD: f32 = 20.0;

fn leaking_cell() -> Arc<ReadingCell> {
    let cell = Arc::new(ReadingCell::new());
    cell.set(100.0);
    cell
}

fn fault(task: TaskId, line: &'static str) -> AppEvent {
    AppEvent::ActuatorFault {
        task,
        error: ActuatorError::GpioWriteFailed(line),
    }
}

#[test]
fn indicator_write_failure_reports_fault_and_keeps_led_off() {
    let sink = RecordingSink::new();
    let mut task = IndicatorTask::new(
        IndicatorLed::new(FailingPin::always()),
        leaking_cell(),
        THRESHOLD,
        sink.clone(),
    );

    assert!(!task.tick());
    assert!(!task.tick());
    assert!(!task.led().is_on());
    assert_eq!(
        sink.events(),
        vec![fault(TaskId::Indicator, "indicator"); 2]
    );
}

#[test]
fn indicator_keeps_last_good_level_after_failure() {
    let sink = RecordingSink::new();
    let cell = leaking_cell();
    let mut task = IndicatorTask::new(
        IndicatorLed::new(FailingPin::after(1)),
        Arc::clone(&cell),
        THRESHOLD,
        sink.clone(),
    );

    assert!(task.tick());
    cell.set(0.0);
    assert!(task.tick(), "failed write must not change the tracked level");
    assert_eq!(
        sink.events(),
        vec![
            AppEvent::IndicatorSet { on: true },
            fault(TaskId::Indicator, "indicator"),
        ]
    );
}

#[test]
fn alarm_write_failure_leaves_buzzer_phase_alone() {
    let sink = RecordingSink::new();
    let mut task = AlarmTask::new(
        Buzzer::new(FailingPin::after(1)),
        leaking_cell(),
        THRESHOLD,
        sink.clone(),
    );

    assert!(task.tick());
    assert!(task.tick());
    assert!(task.tick());
    assert!(task.buzzer().is_sounding());

    let events = sink.events();
    assert_eq!(events[0], AppEvent::AlarmSet { on: true, gas: true });
    assert_eq!(&events[1..], &[fault(TaskId::Alarm, "buzzer"); 2]);
}

#[test]
fn fan_in1_failure_leaves_fan_stopped() {
    let sink = RecordingSink::new();
    let in2 = SimPin::new();
    let mut task = FanTask::new(
        FanDriver::new(FailingPin::always(), in2.clone()),
        leaking_cell(),
        THRESHOLD,
        sink.clone(),
    );

    assert_eq!(task.tick(), FanState::Stopped);
    assert_eq!(task.tick(), FanState::Stopped);
    assert_eq!(task.fan().state(), FanState::Stopped);
    assert_eq!(in2.rising_edges(), 0);
    assert_eq!(sink.events(), vec![fault(TaskId::Fan, "fan IN1"); 2]);
}

#[test]
fn fan_in2_failure_never_raises_in1() {
    let sink = RecordingSink::new();
    let in1 = SimPin::new();
    let mut task = FanTask::new(
        FanDriver::new(in1.clone(), FailingPin::always()),
        leaking_cell(),
        THRESHOLD,
        sink.clone(),
    );

    assert_eq!(task.tick(), FanState::Stopped);
    assert_eq!(in1.rising_edges(), 0);
    assert_eq!(sink.events(), vec![fault(TaskId::Fan, "fan IN2")]);
}

#[test]
fn failing_outputs_do_not_stop_the_loops() {
    let config = MonitorConfig {
        poll_interval_ms: 2,
        idle_interval_ms: 5,
        ..MonitorConfig::default()
    };
    let hw = Hardware {
        sensor: ScriptedSensor::constant(0.5),
        indicator: IndicatorLed::new(FailingPin::always()),
        buzzer: Buzzer::new(FailingPin::always()),
        fan: FanDriver::new(FailingPin::always(), FailingPin::always()),
    };
    let sink = RecordingSink::new();
    let monitor = scheduler::start(&config, hw, sink.clone()).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let tasks = [TaskId::Indicator, TaskId::Alarm, TaskId::Fan];
    while tasks.iter().any(|t| sink.count_for(*t) < 3) {
        assert!(Instant::now() < deadline, "a task stopped after a pin fault");
        std::thread::sleep(Duration::from_millis(2));
    }
    let reading = monitor.cell().get();
    monitor.shutdown().unwrap();

    assert!((reading - 500.0).abs() < 1e-3);
    assert!(sink.events().iter().all(|e| !matches!(
        e,
        AppEvent::IndicatorSet { .. } | AppEvent::AlarmSet { .. } | AppEvent::FanSet(_)
    )));
}
