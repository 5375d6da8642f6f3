//! Hardware adapter — bridges real actuators to the domain port trait.
//!
//! Owns the three actuator drivers and exposes them through
//! [`ActuatorPort`].  This is the only module in the system that touches
//! actual output hardware.  On non-espidf targets, the underlying drivers
//! use cfg-gated simulation stubs.

use crate::app::ports::ActuatorPort;
use crate::drivers::servo::ServoDriver;
use crate::drivers::sky_strip::SkyStrip;
use crate::drivers::sun_led::SunLed;

/// Concrete adapter that combines all actuators behind the port trait.
pub struct HardwareAdapter {
    servo: ServoDriver,
    sun: SunLed,
    sky: SkyStrip,
}

impl HardwareAdapter {
    pub fn new(servo: ServoDriver, sun: SunLed, sky: SkyStrip) -> Self {
        Self { servo, sun, sky }
    }
}

impl ActuatorPort for HardwareAdapter {
    fn engage_servo(&mut self) {
        self.servo.engage();
    }

    fn set_servo_angle(&mut self, deg: u8) {
        self.servo.write_angle(deg);
    }

    fn release_servo(&mut self) {
        self.servo.release();
    }

    fn set_sun(&mut self, r: u8, g: u8, b: u8) {
        self.sun.set_colour(r, g, b);
    }

    fn fill_sky(&mut self, packed: u32) {
        self.sky.fill(packed);
    }

    fn present_sky(&mut self) {
        self.sky.present();
    }

    fn all_off(&mut self) {
        self.servo.release();
        self.sun.off();
        self.sky.off();
    }
}
