//! RGB color samples.
//!
//! Channels are independent 8-bit values.  All channel math clamps into
//! range rather than wrapping, because a wrapped channel shows up on the
//! hardware as a full-brightness flash.

use serde::{Deserialize, Serialize};

/// One color sample: three independent 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 24-bit wire format for the addressable strip:
    /// `r<<16 | g<<8 | b`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Clamp an arbitrary intermediate value into a valid channel.
    /// Used after interpolation/easing, which work in `f32`.
    pub fn channel_from_f32(value: f32) -> u8 {
        value.clamp(0.0, 255.0) as u8
    }
}
