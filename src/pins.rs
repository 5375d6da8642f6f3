//! GPIO / peripheral pin assignments for the sun clock main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Servo (sun elevation arm)
// ---------------------------------------------------------------------------

/// LEDC PWM output for the servo signal line (50 Hz pulse train).
pub const SERVO_PWM_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Sun LED (discrete RGB, common cathode)
// ---------------------------------------------------------------------------

pub const SUN_LED_R_GPIO: i32 = 3;
pub const SUN_LED_G_GPIO: i32 = 5;
pub const SUN_LED_B_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Sky strip (WS2812B over RMT)
// ---------------------------------------------------------------------------

/// Data line for the addressable sky strip.
pub const SKY_STRIP_GPIO: u32 = 7;
/// Number of pixels on the strip.  The whole strip is filled uniformly.
pub const SKY_STRIP_LEN: usize = 10;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution for the sun LED channels (8-bit → 0–255 duty).
pub const SUN_PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the sun LED channels (1 kHz).
pub const SUN_PWM_FREQ_HZ: u32 = 1_000;

/// LEDC base frequency for the servo signal (standard hobby-servo 50 Hz).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// LEDC timer resolution for the servo channel (14-bit for pulse precision).
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;

/// Servo pulse width at 0° (microseconds).
pub const SERVO_MIN_PULSE_US: u32 = 500;
/// Servo pulse width at 180° (microseconds).
pub const SERVO_MAX_PULSE_US: u32 = 2_500;
/// Time the servo is given to reach a commanded angle before the driver
/// releases it (the arm moves at most a few degrees between refreshes).
pub const SERVO_SETTLE_MS: u32 = 300;
