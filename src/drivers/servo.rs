//! Elevation servo driver.
//!
//! A standard hobby servo on LEDC channel 0 (50 Hz, 14-bit).  Angles map
//! linearly onto the 500-2500 µs pulse band.
//!
//! The servo is only powered while a write is in flight: `engage()` starts
//! the pulse train, `write_angle()` commands the position and waits for
//! the arm to settle, `release()` stops the pulses so the motor does not
//! buzz and draw current between refreshes.
//!
//! On host/test targets the driver tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

const SERVO_MAX_ANGLE: u8 = 180;
/// Full scale of the 14-bit duty register.
const DUTY_FULL_SCALE: u32 = (1 << pins::SERVO_PWM_RESOLUTION_BITS) - 1;

pub struct ServoDriver {
    engaged: bool,
    last_angle: u8,
}

impl Default for ServoDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoDriver {
    pub fn new() -> Self {
        Self {
            engaged: false,
            last_angle: 0,
        }
    }

    /// Start the pulse train so the next angle write takes effect.
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// Command `deg` (clamped to 0-180) and wait for the arm to settle.
    /// Ignored unless the servo is engaged.
    pub fn write_angle(&mut self, deg: u8) {
        if !self.engaged {
            return;
        }
        let deg = deg.min(SERVO_MAX_ANGLE);
        hw_init::ledc_set(hw_init::LEDC_CH_SERVO, Self::duty_for_angle(deg));
        self.last_angle = deg;

        #[cfg(target_os = "espidf")]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            pins::SERVO_SETTLE_MS,
        )));
    }

    /// Stop the pulse train; the motor releases torque.
    pub fn release(&mut self) {
        hw_init::servo_detach();
        self.engaged = false;
    }

    pub fn last_angle(&self) -> u8 {
        self.last_angle
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Map an angle onto the duty register: 0° → 500 µs, 180° → 2500 µs,
    /// scaled against the 20 ms frame of the 50 Hz timer.
    fn duty_for_angle(deg: u8) -> u32 {
        let span_us = pins::SERVO_MAX_PULSE_US - pins::SERVO_MIN_PULSE_US;
        let pulse_us =
            pins::SERVO_MIN_PULSE_US + span_us * u32::from(deg) / u32::from(SERVO_MAX_ANGLE);
        let frame_us = 1_000_000 / pins::SERVO_PWM_FREQ_HZ;
        pulse_us * DUTY_FULL_SCALE / frame_us
    }
}
