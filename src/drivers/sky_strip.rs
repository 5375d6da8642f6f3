//! Addressable sky strip driver.
//!
//! Ten WS2812 pixels behind the sky diffuser, driven over RMT.  The strip
//! always shows a uniform colour, so the driver stages one packed RGB
//! value and replicates it across the strip on `present()`.
//!
//! On ESP-IDF: writes the pixel train through `ws2812-esp32-rmt-driver`.
//! On host/test: records the staged and presented fills in-memory.

#[cfg(target_os = "espidf")]
use log::warn;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
use smart_leds::{SmartLedsWrite, RGB8};
#[cfg(target_os = "espidf")]
use ws2812_esp32_rmt_driver::Ws2812Esp32Rmt;

pub struct SkyStrip {
    #[cfg(target_os = "espidf")]
    driver: Ws2812Esp32Rmt<'static>,
    staged: u32,
    presented: u32,
}

impl SkyStrip {
    #[cfg(target_os = "espidf")]
    pub fn new(driver: Ws2812Esp32Rmt<'static>) -> Self {
        Self {
            driver,
            staged: 0,
            presented: 0,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self {
            staged: 0,
            presented: 0,
        }
    }

    /// Stage a uniform fill (24-bit packed RGB).  Nothing changes on the
    /// physical strip until `present()`.
    pub fn fill(&mut self, packed: u32) {
        self.staged = packed & 0x00FF_FFFF;
    }

    /// Latch the staged fill onto the strip.
    #[cfg(target_os = "espidf")]
    pub fn present(&mut self) {
        let pixel = RGB8::new(
            (self.staged >> 16) as u8,
            (self.staged >> 8) as u8,
            self.staged as u8,
        );
        let pixels = core::iter::repeat_n(pixel, pins::SKY_STRIP_LEN);
        if let Err(e) = self.driver.write(pixels) {
            warn!("sky strip write failed: {e:?}");
            return;
        }
        self.presented = self.staged;
    }

    /// Latch the staged fill (simulation: just records it).
    #[cfg(not(target_os = "espidf"))]
    pub fn present(&mut self) {
        self.presented = self.staged;
    }

    pub fn off(&mut self) {
        self.fill(0);
        self.present();
    }

    /// The fill currently showing on the strip.
    pub fn presented_fill(&self) -> u32 {
        self.presented
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for SkyStrip {
    fn default() -> Self {
        Self::new()
    }
}
