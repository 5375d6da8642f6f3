//! Mock adapters for integration tests.
//!
//! Records every actuator call and emitted event so tests can assert on
//! the full command history without touching real GPIO/PWM registers.

use sunclock::app::events::AppEvent;
use sunclock::app::ports::{ActuatorPort, ClockPort, ClockReading, Date, EphemerisPort, EventSink};
use sunclock::error::ClockError;
use sunclock::solar::events::SolarTimes;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    EngageServo,
    SetServoAngle { deg: u8 },
    ReleaseServo,
    SetSun { r: u8, g: u8, b: u8 },
    FillSky { packed: u32 },
    PresentSky,
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_servo_angle(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetServoAngle { deg } => Some(*deg),
            _ => None,
        })
    }

    pub fn last_sun(&self) -> Option<(u8, u8, u8)> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetSun { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        })
    }

    pub fn sky_presents(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ActuatorCall::PresentSky)
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn engage_servo(&mut self) {
        self.calls.push(ActuatorCall::EngageServo);
    }

    fn set_servo_angle(&mut self, deg: u8) {
        self.calls.push(ActuatorCall::SetServoAngle { deg });
    }

    fn release_servo(&mut self) {
        self.calls.push(ActuatorCall::ReleaseServo);
    }

    fn set_sun(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(ActuatorCall::SetSun { r, g, b });
    }

    fn fill_sky(&mut self, packed: u32) {
        self.calls.push(ActuatorCall::FillSky { packed });
    }

    fn present_sky(&mut self) {
        self.calls.push(ActuatorCall::PresentSky);
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── Scripted clock ────────────────────────────────────────────

/// Clock whose readings are scripted per tick; errors are scriptable too.
pub struct ScriptedClock {
    pub readings: Vec<Result<ClockReading, ClockError>>,
    pub cursor: usize,
}

#[allow(dead_code)]
impl ScriptedClock {
    pub fn new(readings: Vec<Result<ClockReading, ClockError>>) -> Self {
        Self {
            readings,
            cursor: 0,
        }
    }

    pub fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> ClockReading {
        ClockReading {
            date: Date { year, month, day },
            hour,
            minute,
            second: 0,
        }
    }
}

impl ClockPort for ScriptedClock {
    fn now(&mut self) -> Result<ClockReading, ClockError> {
        let r = self
            .readings
            .get(self.cursor)
            .copied()
            .unwrap_or(Err(ClockError::ReadFailed));
        self.cursor += 1;
        r
    }
}

// ── Fixed ephemeris ───────────────────────────────────────────

/// Ephemeris returning the same schedule for every date, counting calls.
pub struct FixedEphemeris {
    pub times: SolarTimes,
    pub calls: u32,
}

#[allow(dead_code)]
impl FixedEphemeris {
    /// civil 05:00 / sunrise 06:00 / sunset 20:00 / civil 21:00
    pub fn standard() -> Self {
        Self {
            times: SolarTimes {
                civil_sunrise_h: 5.0,
                sunrise_h: 6.0,
                sunset_h: 20.0,
                civil_sunset_h: 21.0,
            },
            calls: 0,
        }
    }
}

impl EphemerisPort for FixedEphemeris {
    fn solar_times(&mut self, _date: Date) -> SolarTimes {
        self.calls += 1;
        self.times
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_clock_lost(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ClockLost))
            .count()
    }

    pub fn count_schedules(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::SolarEventsComputed { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
