//! Solar key points for one calendar day.
//!
//! The ephemeris yields four instants — civil sunrise, sunrise, sunset,
//! civil sunset — as fractional hours of the local day.  This module
//! truncates them to whole minutes, derives solar noon as the integer
//! midpoint of sunrise/sunset, and attaches the reference color for each
//! key point.  The resulting [`SolarEvents`] is rebuilt wholesale once per
//! calendar day and never partially mutated.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::solar::color::Color;

/// Minutes in a day; the valid [`TimeOfDay`] domain is `[0, 1439]`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day in whole minutes since midnight, always `< 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from wall-clock hour/minute.  Out-of-range inputs clamp to
    /// the last minute of the day rather than wrapping.
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        let total = hour as u16 * 60 + minute as u16;
        if total >= MINUTES_PER_DAY {
            Self(MINUTES_PER_DAY - 1)
        } else {
            Self(total)
        }
    }

    /// Build from a raw minute count, clamping into `[0, 1439]`.
    pub const fn from_minutes(minutes: u16) -> Self {
        if minutes >= MINUTES_PER_DAY {
            Self(MINUTES_PER_DAY - 1)
        } else {
            Self(minutes)
        }
    }

    /// Truncate a fractional hour of day toward zero and clamp.
    /// Negative inputs (a degenerate ephemeris result) clamp to midnight.
    pub fn from_fractional_hours(hours: f64) -> Self {
        let minutes = (hours * 60.0) as i64; // trunc toward zero
        Self(minutes.clamp(0, (MINUTES_PER_DAY - 1) as i64) as u16)
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One solar instant paired with its reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub time: TimeOfDay,
    pub color: Color,
}

impl KeyPoint {
    pub const fn new(time: TimeOfDay, color: Color) -> Self {
        Self { time, color }
    }
}

/// Raw ephemeris output for one day: fractional hours of the local day.
///
/// Equal or inverted values are legal (polar day/night) — downstream code
/// guards every zero-width span instead of rejecting them here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimes {
    pub civil_sunrise_h: f64,
    pub sunrise_h: f64,
    pub sunset_h: f64,
    pub civil_sunset_h: f64,
}

/// The five ordered key points of one calendar day.
///
/// Invariants (non-strict; degenerate equal times are legal):
/// `civil_sunrise.time ≤ sunrise.time ≤ noon.time ≤ sunset.time ≤
/// civil_sunset.time`, with `noon.time` the integer midpoint of
/// sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEvents {
    pub civil_sunrise: KeyPoint,
    pub sunrise: KeyPoint,
    pub noon: KeyPoint,
    pub sunset: KeyPoint,
    pub civil_sunset: KeyPoint,
}

impl SolarEvents {
    /// Assemble the day's key points from raw ephemeris times plus the
    /// configured reference colors.
    pub fn from_times(times: &SolarTimes, config: &SystemConfig) -> Self {
        let civil_sunrise = TimeOfDay::from_fractional_hours(times.civil_sunrise_h);
        let sunrise = TimeOfDay::from_fractional_hours(times.sunrise_h);
        let sunset = TimeOfDay::from_fractional_hours(times.sunset_h);
        let civil_sunset = TimeOfDay::from_fractional_hours(times.civil_sunset_h);

        // Solar noon is derived, not queried: the integer midpoint of the
        // sunrise→sunset span.
        let half_day = sunset.minutes().saturating_sub(sunrise.minutes()) / 2;
        let noon = TimeOfDay::from_minutes(sunrise.minutes() + half_day);

        Self {
            civil_sunrise: KeyPoint::new(civil_sunrise, Color::BLACK),
            sunrise: KeyPoint::new(sunrise, config.horizon_sun),
            noon: KeyPoint::new(noon, config.noon_sun),
            sunset: KeyPoint::new(sunset, config.horizon_sun),
            civil_sunset: KeyPoint::new(civil_sunset, Color::BLACK),
        }
    }

    /// True when the five key points are in non-decreasing time order.
    pub fn is_ordered(&self) -> bool {
        self.civil_sunrise.time <= self.sunrise.time
            && self.sunrise.time <= self.noon.time
            && self.noon.time <= self.sunset.time
            && self.sunset.time <= self.civil_sunset.time
    }
}
