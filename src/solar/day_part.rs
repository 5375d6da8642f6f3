//! Day-part classification.
//!
//! Pure, total function from (time of day, solar events) to one of five
//! day parts.  The decision chain is strict greater-than against the key
//! points in descending order, first match wins; the pre-dawn and
//! post-dusk intervals both collapse to [`DayPart::Night`].
//!
//! The strict-`>` boundary convention is load-bearing: at exactly
//! `noon.time` the classification is still [`DayPart::BeforeNoon`], and
//! every projection evaluated there reproduces the noon key point's
//! reference values, which is what keeps the outputs continuous across
//! key-point boundaries.

use crate::solar::events::{SolarEvents, TimeOfDay};

/// The five mutually exclusive phases of the lamp's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DayPart {
    Night = 0,
    Sunrise = 1,
    BeforeNoon = 2,
    AfterNoon = 3,
    Sunset = 4,
}

impl DayPart {
    /// Position in the daily walk `Night → Sunrise → BeforeNoon →
    /// AfterNoon → Sunset → Night`.  Used by tests to assert the
    /// classification is a non-decreasing walk (modulo the final wrap).
    pub const fn order_index(self) -> u8 {
        self as u8
    }
}

/// Classify `now` against the day's key points.
pub fn classify(now: TimeOfDay, events: &SolarEvents) -> DayPart {
    if now > events.civil_sunset.time {
        DayPart::Night
    } else if now > events.sunset.time {
        DayPart::Sunset
    } else if now > events.noon.time {
        DayPart::AfterNoon
    } else if now > events.sunrise.time {
        DayPart::BeforeNoon
    } else if now > events.civil_sunrise.time {
        DayPart::Sunrise
    } else {
        DayPart::Night
    }
}
