//! Discrete sun LED driver.
//!
//! Three LEDC PWM channels (CH1-3) drive the discrete R/G/B LEDs behind
//! the sun diffuser.
//!
//! On ESP-IDF: writes the three duty registers via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct SunLed {
    current: (u8, u8, u8),
}

impl Default for SunLed {
    fn default() -> Self {
        Self::new()
    }
}

impl SunLed {
    pub fn new() -> Self {
        Self { current: (0, 0, 0) }
    }

    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_SUN_R, u32::from(r));
        hw_init::ledc_set(hw_init::LEDC_CH_SUN_G, u32::from(g));
        hw_init::ledc_set(hw_init::LEDC_CH_SUN_B, u32::from(b));
        self.current = (r, g, b);
    }

    pub fn off(&mut self) {
        self.set_colour(0, 0, 0);
    }

    pub fn current_colour(&self) -> (u8, u8, u8) {
        self.current
    }
}
