//! Threaded tests: the scheduler runs all four loops concurrently.

use std::time::{Duration, Instant};

use gaswatch::app::events::TaskId;
use gaswatch::config::MonitorConfig;
use gaswatch::drivers::buzzer::Buzzer;
use gaswatch::drivers::fan::FanDriver;
use gaswatch::drivers::indicator::IndicatorLed;
use gaswatch::drivers::sim_pin::SimPin;
use gaswatch::scheduler::{self, Hardware};

use crate::mock_hw::{RecordingSink, ScriptedSensor};

struct Probes {
    led: SimPin,
    buzzer: SimPin,
    in1: SimPin,
    in2: SimPin,
}

fn fast_config() -> MonitorConfig {
    MonitorConfig {
        poll_interval_ms: 2,
        idle_interval_ms: 5,
        ..MonitorConfig::default()
    }
}

fn hardware(level: f32) -> (Hardware<ScriptedSensor, SimPin, SimPin, SimPin, SimPin>, Probes) {
    let probes = Probes {
        led: SimPin::new(),
        buzzer: SimPin::new(),
        in1: SimPin::new(),
        in2: SimPin::new(),
    };
    let hw = Hardware {
        sensor: ScriptedSensor::constant(level),
        indicator: IndicatorLed::new(probes.led.clone()),
        buzzer: Buzzer::new(probes.buzzer.clone()),
        fan: FanDriver::new(probes.in1.clone(), probes.in2.clone()),
    };
    (hw, probes)
}

/// Wait until every task has logged at least `cycles` status events.
fn wait_for_cycles(sink: &RecordingSink, cycles: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    let tasks = [TaskId::Sampler, TaskId::Indicator, TaskId::Alarm, TaskId::Fan];
    while tasks.iter().any(|t| sink.count_for(*t) < cycles) {
        assert!(Instant::now() < deadline, "tasks did not reach {cycles} cycles");
        std::thread::sleep(Duration::from_millis(2));
    }
}

#[test]
fn leak_turns_on_indicator_and_fan_and_pulses_buzzer() {
    let (hw, probes) = hardware(0.5);
    let sink = RecordingSink::new();
    let monitor = scheduler::start(&fast_config(), hw, sink.clone()).unwrap();

    wait_for_cycles(&sink, 10);
    let reading = monitor.cell().get();
    monitor.shutdown().unwrap();

    assert!((reading - 500.0).abs() < 1e-3);
    assert!(probes.led.is_high());
    assert!(probes.in1.is_high());
    assert_eq!(probes.in2.rising_edges(), 0);
    // Pulsing: the buzzer went high more than once over ten-plus cycles.
    assert!(probes.buzzer.rising_edges() >= 2);
}

#[test]
fn clean_air_keeps_outputs_low() {
    let (hw, probes) = hardware(0.005);
    let sink = RecordingSink::new();
    let monitor = scheduler::start(&fast_config(), hw, sink.clone()).unwrap();

    wait_for_cycles(&sink, 5);
    monitor.shutdown().unwrap();

    assert!(!probes.led.is_high());
    assert!(!probes.buzzer.is_high());
    assert!(!probes.in1.is_high());
    assert_eq!(probes.led.rising_edges(), 0);
    assert_eq!(probes.buzzer.rising_edges(), 0);
    assert_eq!(probes.in2.rising_edges(), 0);
}

#[test]
fn shutdown_stops_every_loop() {
    let (hw, _probes) = hardware(0.1);
    let sink = RecordingSink::new();
    let monitor = scheduler::start(&fast_config(), hw, sink.clone()).unwrap();
    wait_for_cycles(&sink, 2);
    monitor.shutdown().unwrap();

    let after = sink.events().len();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(sink.events().len(), after, "a task kept running after shutdown");
}
