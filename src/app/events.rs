//! Outbound application events.
//!
//! The [`SunClockService`](super::service::SunClockService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — today that is the serial
//! log.

use crate::app::ports::Date;
use crate::solar::color::Color;
use crate::solar::day_part::DayPart;
use crate::solar::events::SolarEvents;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started.
    Started,

    /// The day's solar schedule was (re)computed.
    SolarEventsComputed { date: Date, events: SolarEvents },

    /// The classification moved to a new day part.
    DayPartChanged { from: DayPart, to: DayPart },

    /// The clock could not be read; the service is coasting on the last
    /// good reading.
    ClockLost,

    /// Periodic snapshot of the current outputs.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot of everything the lamp is showing.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub day_part: DayPart,
    pub minute_of_day: u16,
    pub servo_deg: u8,
    pub sun: Color,
    /// `None` while the sky strip is holding its previous fill (night).
    pub sky: Option<Color>,
}
