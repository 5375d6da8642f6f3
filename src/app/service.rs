//! Application service — the hexagonal core.
//!
//! [`SunClockService`] owns the daily solar schedule and the last known
//! clock reading, and runs one full refresh per tick.  All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!    ClockPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//! EphemerisPort ─▶ │    SunClockService      │
//!  ActuatorPort ◀──│  events · classify ·    │
//!                  │  project                │
//!                  └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::solar::day_part::{classify, DayPart};
use crate::solar::events::SolarEvents;
use crate::solar::projection;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, ClockPort, Date, EphemerisPort, EventSink};

// ───────────────────────────────────────────────────────────────
// SunClockService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct SunClockService {
    config: SystemConfig,
    /// Today's key points; rebuilt wholesale when the date changes.
    events: Option<SolarEvents>,
    /// Calendar date `events` was computed for.
    computed_for: Option<Date>,
    /// Last successful clock sample; the fallback when a read fails.
    last_reading: Option<super::ports::ClockReading>,
    last_part: Option<DayPart>,
    tick_count: u64,
}

impl SunClockService {
    /// Construct the service from configuration.  The solar schedule is
    /// computed lazily on the first tick.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            events: None,
            computed_for: None,
            last_reading: None,
            last_part: None,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "SunClockService started (site {:.4}, {:.4}, UTC{:+})",
            self.config.latitude, self.config.longitude, self.config.dst_offset
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full refresh: read clock → recompute schedule on date
    /// change → classify → project → apply outputs.
    pub fn tick(
        &mut self,
        clock: &mut impl ClockPort,
        ephemeris: &mut impl EphemerisPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample the clock; on failure coast on the last good reading.
        let reading = match clock.now() {
            Ok(r) => {
                self.last_reading = Some(r);
                r
            }
            Err(e) => {
                warn!("clock read failed ({e}), reusing last reading");
                sink.emit(&AppEvent::ClockLost);
                match self.last_reading {
                    Some(r) => r,
                    // Never had a reading — nothing sane to show yet.
                    None => return,
                }
            }
        };

        // 2. Recompute the solar schedule whenever the calendar date
        //    differs from the one it was computed for.
        if self.computed_for != Some(reading.date) {
            let times = ephemeris.solar_times(reading.date);
            let events = SolarEvents::from_times(&times, &self.config);
            self.events = Some(events);
            self.computed_for = Some(reading.date);
            sink.emit(&AppEvent::SolarEventsComputed {
                date: reading.date,
                events,
            });
        }
        let Some(events) = self.events else {
            return; // unreachable: set just above
        };

        // 3. Classify and project.
        let now = reading.time_of_day();
        let part = classify(now, &events);
        if let Some(prev) = self.last_part {
            if prev != part {
                sink.emit(&AppEvent::DayPartChanged { from: prev, to: part });
            }
        }
        self.last_part = Some(part);

        let servo_deg = projection::servo_angle(
            part,
            now,
            &events,
            self.config.min_servo_deg,
            self.config.max_servo_deg,
        );
        let sun = projection::sun_color(part, now, &events);
        let sky = projection::sky_color(part, now, &events, self.config.blue_sky);

        // 4. Apply outputs through the actuator port.
        hw.set_sun(sun.r, sun.g, sun.b);

        // Scoped acquisition: the servo only holds torque for the write.
        hw.engage_servo();
        hw.set_servo_angle(servo_deg);
        hw.release_servo();

        // Night leaves the strip alone (it has already faded to black).
        if let Some(color) = sky {
            hw.fill_sky(color.packed());
            hw.present_sky();
        }

        // 5. Periodic telemetry.
        if self.tick_count % u64::from(self.config.telemetry_every_ticks.max(1)) == 0 {
            sink.emit(&AppEvent::Telemetry(TelemetryData {
                day_part: part,
                minute_of_day: now.minutes(),
                servo_deg,
                sun,
                sky,
            }));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Day part of the most recent tick, if any tick has run.
    pub fn day_part(&self) -> Option<DayPart> {
        self.last_part
    }

    /// The schedule currently in effect.
    pub fn solar_events(&self) -> Option<&SolarEvents> {
        self.events.as_ref()
    }

    /// Total refresh ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }
}
