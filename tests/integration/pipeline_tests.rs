//! Lockstep pipeline tests: sampler → cell → actuators, one cycle at a time.

use std::sync::Arc;

use gaswatch::app::events::AppEvent;
use gaswatch::drivers::buzzer::Buzzer;
use gaswatch::drivers::fan::{FanDriver, FanState};
use gaswatch::drivers::indicator::IndicatorLed;
use gaswatch::drivers::sim_pin::SimPin;
use gaswatch::reading::ReadingCell;
use gaswatch::tasks::{AlarmTask, FanTask, IndicatorTask, PeriodicTask, SamplerTask};

use crate::mock_hw::{RecordingSink, ScriptedSensor};

const THRESHOLD: f32 = 20.0;
const SCALE: f32 = 1000.0;

struct Rig {
    sampler: SamplerTask<ScriptedSensor, RecordingSink>,
    indicator: IndicatorTask<SimPin, RecordingSink>,
    alarm: AlarmTask<SimPin, RecordingSink>,
    fan: FanTask<SimPin, SimPin, RecordingSink>,
    fan_in2: SimPin,
    sink: RecordingSink,
}

impl Rig {
    fn new(levels: &[f32]) -> Self {
        let cell = Arc::new(ReadingCell::new());
        let sink = RecordingSink::new();
        let fan_in2 = SimPin::new();
        Self {
            sampler: SamplerTask::new(
                ScriptedSensor::new(levels),
                Arc::clone(&cell),
                SCALE,
                sink.clone(),
            ),
            indicator: IndicatorTask::new(
                IndicatorLed::new(SimPin::new()),
                Arc::clone(&cell),
                THRESHOLD,
                sink.clone(),
            ),
            alarm: AlarmTask::new(
                Buzzer::new(SimPin::new()),
                Arc::clone(&cell),
                THRESHOLD,
                sink.clone(),
            ),
            fan: FanTask::new(
                FanDriver::new(SimPin::new(), fan_in2.clone()),
                Arc::clone(&cell),
                THRESHOLD,
                sink.clone(),
            ),
            fan_in2,
            sink,
        }
    }

    /// One period: the sampler publishes, then each consumer runs once.
    fn cycle(&mut self) -> (f32, bool, bool, FanState) {
        let reading = self.sampler.tick();
        let led = self.indicator.tick();
        let fan = self.fan.tick();
        let buzzer = self.alarm.tick();
        (reading, led, buzzer, fan)
    }
}

#[test]
fn rising_gas_drives_all_actuators() {
    let mut rig = Rig::new(&[0.01, 0.02, 0.03]);

    let (r, led, buzzer, fan) = rig.cycle();
    assert!((r - 10.0).abs() < 1e-3);
    assert!(!led);
    assert_eq!(fan, FanState::Stopped);
    assert!(!buzzer);

    let (r, led, buzzer, fan) = rig.cycle();
    assert!(r >= THRESHOLD, "0.02 × 1000 must reach the threshold, got {r}");
    assert!(led);
    assert_eq!(fan, FanState::Forward);
    assert!(buzzer);

    let (r, led, buzzer, fan) = rig.cycle();
    assert!((r - 30.0).abs() < 1e-3);
    assert!(led);
    assert_eq!(fan, FanState::Forward);
    assert!(!buzzer);
}

#[test]
fn clearing_gas_silences_everything() {
    let mut rig = Rig::new(&[0.5, 0.5, 0.5, 0.0, 0.0]);
    for _ in 0..3 {
        rig.cycle();
    }
    assert!(rig.alarm.buzzer().is_sounding());

    let (_, led, buzzer, fan) = rig.cycle();
    assert!(!led);
    assert!(!buzzer);
    assert_eq!(fan, FanState::Stopped);

    let (_, _, buzzer, _) = rig.cycle();
    assert!(!buzzer);
    assert_eq!(rig.fan_in2.rising_edges(), 0);
}

#[test]
fn every_cycle_emits_one_status_per_task() {
    let mut rig = Rig::new(&[0.0, 0.5]);
    rig.cycle();
    rig.cycle();

    let events = rig.sink.events();
    assert_eq!(events.len(), 8);
    assert_eq!(
        &events[4..],
        &[
            AppEvent::ReadingSampled { reading: 500.0 },
            AppEvent::IndicatorSet { on: true },
            AppEvent::FanSet(FanState::Forward),
            AppEvent::AlarmSet { on: true, gas: true },
        ]
    );
}

#[test]
fn consumers_see_stale_reading_until_sampler_runs() {
    let mut rig = Rig::new(&[0.0, 0.9]);
    rig.cycle();

    // Consumers tick again before the sampler publishes the new level.
    assert!(!rig.indicator.tick());
    assert_eq!(rig.fan.tick(), FanState::Stopped);

    rig.sampler.tick();
    assert!(rig.indicator.tick());
    assert_eq!(rig.fan.tick(), FanState::Forward);
}
