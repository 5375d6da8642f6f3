//! System configuration parameters
//!
//! All tunable parameters for the sun clock: observer location, servo
//! travel, reference colors, and loop timing.  Supplied as compile-time
//! defaults; there is no runtime provisioning surface.

use serde::{Deserialize, Serialize};

use crate::solar::color::Color;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Observer location ---
    /// Latitude in decimal degrees (north positive).
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive).
    pub longitude: f64,
    /// Offset from UTC in whole hours, DST included.
    pub dst_offset: i8,

    // --- Servo travel ---
    /// Servo angle at sunrise and through the night (degrees).
    pub min_servo_deg: u8,
    /// Servo angle at sunset (degrees).
    pub max_servo_deg: u8,

    // --- Reference colors ---
    /// Sun color when sitting on the horizon (sunrise/sunset key points).
    pub horizon_sun: Color,
    /// Sun color at solar noon.
    pub noon_sun: Color,
    /// Sky color during full daylight; only its blue channel is ramped
    /// during twilight.
    pub blue_sky: Color,

    // --- Timing ---
    /// Output refresh interval (milliseconds).
    pub refresh_interval_ms: u32,
    /// Emit a telemetry event every this many refresh ticks.
    pub telemetry_every_ticks: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Wrocław, PL
            latitude: 51.107_885_2,
            longitude: 17.038_537_6,
            dst_offset: 2,

            // Servo
            min_servo_deg: 0,
            max_servo_deg: 180,

            // Colors
            horizon_sun: Color::new(27, 4, 0),
            noon_sun: Color::new(255, 200, 0),
            blue_sky: Color::new(0, 5, 12),

            // Timing
            refresh_interval_ms: 30_000, // 30 s
            telemetry_every_ticks: 10,   // every 5 min at default refresh
        }
    }
}
