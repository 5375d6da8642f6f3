//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SunClockService (domain)
//! ```
//!
//! Driven adapters (the RTC, the astronomical engine, the actuators, event
//! sinks) implement these traits.  The
//! [`SunClockService`](super::service::SunClockService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::ClockError;
use crate::solar::events::{SolarTimes, TimeOfDay};

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC → domain)
// ───────────────────────────────────────────────────────────────

/// A calendar date as reported by the clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// One wall-clock sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub date: Date,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockReading {
    /// Minutes since midnight, the domain's time representation.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hm(self.hour, self.minute)
    }
}

/// Read-side port: the domain calls this once per tick for wall-clock time.
///
/// Implementations must be monotone in wall-clock terms across ticks within
/// a day.  A failed read is not fatal — the service logs it and re-uses the
/// last good reading.
pub trait ClockPort {
    fn now(&mut self) -> Result<ClockReading, ClockError>;
}

// ───────────────────────────────────────────────────────────────
// Ephemeris port (driven adapter: astronomical engine → domain)
// ───────────────────────────────────────────────────────────────

/// Astronomical engine seam: one calendar date in, four instants out.
///
/// The observer position and UTC offset are adapter construction
/// parameters.  Returned values are fractional hours of the *local* day;
/// the domain truncates them to whole minutes.  Degenerate outputs (equal
/// or inverted instants at polar latitudes) are passed through unchanged —
/// the domain's zero-span guards handle them.
pub trait EphemerisPort {
    fn solar_times(&mut self, date: Date) -> SolarTimes;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the three actuators.
///
/// The servo follows a scoped-acquisition discipline: [`engage_servo`]
/// immediately before a write, [`release_servo`] on every exit path, so
/// the motor never holds torque between refreshes.
///
/// [`engage_servo`]: ActuatorPort::engage_servo
/// [`release_servo`]: ActuatorPort::release_servo
pub trait ActuatorPort {
    /// Power/attach the servo so the next angle write takes effect.
    fn engage_servo(&mut self);

    /// Command the servo to `deg` (0–180).
    fn set_servo_angle(&mut self, deg: u8);

    /// Detach the servo output so the motor stops holding current.
    fn release_servo(&mut self);

    /// Write the three sun LED duty cycles (one PWM channel per color).
    fn set_sun(&mut self, r: u8, g: u8, b: u8);

    /// Stage a uniform fill of the sky strip (24-bit packed RGB).
    fn fill_sky(&mut self, packed: u32);

    /// Latch the staged fill onto the physical strip.
    fn present_sky(&mut self);

    /// Kill all outputs (servo released, LEDs dark) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a future
/// display, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
