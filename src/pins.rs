//! GPIO / peripheral pin assignments for the GasWatch board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Gas sensor: Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-2 LPG/smoke sensor: analog voltage via resistive divider on
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const MQ2_ADC_CHANNEL: u32 = 0;
/// Full-scale raw count for the 12-bit oneshot ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Indicator + alarm
// ---------------------------------------------------------------------------

/// Digital output: leak indicator LED (active HIGH).
pub const INDICATOR_LED_GPIO: i32 = 2;
/// Digital output: piezo buzzer driver transistor (active HIGH).
pub const BUZZER_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Exhaust fan motor driver (L298N-style dual input)
// ---------------------------------------------------------------------------

/// Motor driver IN1 (line A). HIGH with IN2 LOW = forward.
pub const FAN_IN1_GPIO: i32 = 6;
/// Motor driver IN2 (line B). Never driven HIGH by this firmware.
pub const FAN_IN2_GPIO: i32 = 5;

/// Every digital output, in init order.
pub const OUTPUT_GPIOS: [i32; 4] = [
    INDICATOR_LED_GPIO,
    BUZZER_GPIO,
    FAN_IN1_GPIO,
    FAN_IN2_GPIO,
];
